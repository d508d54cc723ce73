use crate::browser::Navigation;

/// A registered user and the browsing history only they can touch.
#[derive(Debug)]
pub struct User {
    username: String,
    navigation: Navigation,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            navigation: Navigation::new(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn navigation_mut(&mut self) -> &mut Navigation {
        &mut self.navigation
    }
}
