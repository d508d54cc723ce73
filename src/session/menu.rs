//! Numbered menu choices for the three session states.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    SignUp,
    LogIn,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberChoice {
    Visit,
    Back,
    Forward,
    ShowCurrent,
    ShowHistory,
    Clear,
    Search,
    LogOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminChoice {
    ListUsers,
    ViewHistory,
    LogOut,
}

impl MainChoice {
    pub const ITEMS: &'static [&'static str] = &["Sign up", "Log in", "Exit"];

    pub fn parse(input: &str) -> Option<Self> {
        match number(input)? {
            1 => Some(Self::SignUp),
            2 => Some(Self::LogIn),
            3 => Some(Self::Exit),
            _ => None,
        }
    }
}

impl MemberChoice {
    pub const ITEMS: &'static [&'static str] = &[
        "Visit Website",
        "<- Go Back",
        "-> Go Forward",
        "Show Current Page",
        "Show Full History",
        "Clear History",
        "Search in History",
        "Logout",
    ];

    pub fn parse(input: &str) -> Option<Self> {
        match number(input)? {
            1 => Some(Self::Visit),
            2 => Some(Self::Back),
            3 => Some(Self::Forward),
            4 => Some(Self::ShowCurrent),
            5 => Some(Self::ShowHistory),
            6 => Some(Self::Clear),
            7 => Some(Self::Search),
            8 => Some(Self::LogOut),
            _ => None,
        }
    }
}

impl AdminChoice {
    pub const ITEMS: &'static [&'static str] = &[
        "View all users",
        "View history of a specific user",
        "Logout",
    ];

    pub fn parse(input: &str) -> Option<Self> {
        match number(input)? {
            1 => Some(Self::ListUsers),
            2 => Some(Self::ViewHistory),
            3 => Some(Self::LogOut),
            _ => None,
        }
    }
}

fn number(input: &str) -> Option<u8> {
    input.trim().parse().ok()
}
