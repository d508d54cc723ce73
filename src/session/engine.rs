use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::config::Settings;
use crate::users::UserDirectory;

use super::menu::{AdminChoice, MainChoice, MemberChoice};
use super::outcome::{NavAction, Outcome, UserAction};
use super::render::Renderer;

/// Who is logged in. The admin is a capability, not a directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Admin,
    Member(String),
}

enum Flow {
    Continue,
    Exit,
}

/// The interactive command loop. Owns the directory and the active login.
pub struct Session<R: BufRead, W: Write> {
    directory: UserDirectory,
    active: Option<Identity>,
    input: R,
    renderer: Renderer<W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(settings: &Settings, input: R, output: W) -> Self {
        Self {
            directory: UserDirectory::new(settings.admin_name.clone()),
            active: None,
            input,
            renderer: Renderer::new(output, settings),
        }
    }

    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    pub fn active(&self) -> Option<&Identity> {
        self.active.as_ref()
    }

    pub fn into_output(self) -> W {
        self.renderer.into_inner()
    }

    /// Runs until the exit choice or end of input.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let flow = match self.active.clone() {
                None => self.main_menu()?,
                Some(Identity::Admin) => self.admin_menu()?,
                Some(Identity::Member(name)) => self.member_menu(&name)?,
            };
            if let Flow::Exit = flow {
                return Ok(());
            }
        }
    }

    fn main_menu(&mut self) -> Result<Flow> {
        self.renderer.menu("LOGIN MENU", MainChoice::ITEMS)?;
        let Some(input) = self.ask("Choice: ")? else {
            return Ok(Flow::Exit);
        };

        let outcome = match MainChoice::parse(&input) {
            Some(MainChoice::SignUp) => {
                let Some(name) = self.ask("Enter new username: ")? else {
                    return Ok(Flow::Exit);
                };
                let outcome = match self.directory.create(&name) {
                    Ok(user) => Outcome::SignedUp {
                        username: user.username(),
                    },
                    Err(error) => Outcome::DirectoryFailed {
                        action: UserAction::SignUp,
                        error,
                    },
                };
                self.renderer.emit(&outcome)?;
                return Ok(Flow::Continue);
            }
            Some(MainChoice::LogIn) => {
                let Some(name) = self.ask("Enter username: ")? else {
                    return Ok(Flow::Exit);
                };
                let outcome = if self.directory.is_admin(&name) {
                    self.active = Some(Identity::Admin);
                    info!("admin logged in");
                    Outcome::LoggedIn {
                        username: &name,
                        admin: true,
                    }
                } else {
                    match self.directory.lookup(&name) {
                        Ok(user) => {
                            self.active = Some(Identity::Member(user.username().to_string()));
                            info!("{} logged in", user.username());
                            Outcome::LoggedIn {
                                username: user.username(),
                                admin: false,
                            }
                        }
                        Err(error) => Outcome::DirectoryFailed {
                            action: UserAction::LogIn,
                            error,
                        },
                    }
                };
                self.renderer.emit(&outcome)?;
                return Ok(Flow::Continue);
            }
            Some(MainChoice::Exit) => {
                self.renderer.emit(&Outcome::Goodbye)?;
                return Ok(Flow::Exit);
            }
            None => Outcome::InvalidChoice { input: &input },
        };
        debug!("invalid main menu choice {:?}", input);
        self.renderer.emit(&outcome)?;
        Ok(Flow::Continue)
    }

    fn member_menu(&mut self, name: &str) -> Result<Flow> {
        self.renderer
            .menu(&format!("USER MENU ({})", name), MemberChoice::ITEMS)?;
        let Some(input) = self.ask("Choice: ")? else {
            return Ok(Flow::Exit);
        };
        let choice = MemberChoice::parse(&input);

        let argument = match choice {
            Some(MemberChoice::Visit) => self.ask("Enter website URL: ")?,
            Some(MemberChoice::Search) => self.ask("Enter keyword to search: ")?,
            _ => Some(String::new()),
        };
        let Some(argument) = argument else {
            return Ok(Flow::Exit);
        };

        let Some(user) = self.directory.find_mut(name) else {
            warn!("logged-in user {} is missing from the directory", name);
            self.active = None;
            return Ok(Flow::Continue);
        };
        let navigation = user.navigation_mut();

        let outcome = match choice {
            Some(MemberChoice::Visit) => Outcome::Visited {
                url: navigation.visit(argument).url(),
            },
            Some(MemberChoice::Back) => match navigation.go_back() {
                Ok(page) => Outcome::WentBack { url: page.url() },
                Err(error) => Outcome::NavigationFailed {
                    action: NavAction::Back,
                    error,
                },
            },
            Some(MemberChoice::Forward) => match navigation.go_forward() {
                Ok(page) => Outcome::WentForward { url: page.url() },
                Err(error) => Outcome::NavigationFailed {
                    action: NavAction::Forward,
                    error,
                },
            },
            Some(MemberChoice::ShowCurrent) => match navigation.current_page() {
                Ok(page) => Outcome::Current { url: page.url() },
                Err(error) => Outcome::NavigationFailed {
                    action: NavAction::Current,
                    error,
                },
            },
            Some(MemberChoice::ShowHistory) => match navigation.list_all() {
                Ok(entries) => Outcome::History {
                    owner: name,
                    entries: entries.collect(),
                },
                Err(error) => Outcome::NavigationFailed {
                    action: NavAction::History,
                    error,
                },
            },
            Some(MemberChoice::Clear) => match navigation.clear() {
                Ok(released) => Outcome::Cleared { released },
                Err(error) => Outcome::NavigationFailed {
                    action: NavAction::Clear,
                    error,
                },
            },
            Some(MemberChoice::Search) => match navigation.search(&argument) {
                Ok(hits) => Outcome::Found {
                    keyword: &argument,
                    hits,
                },
                Err(error) => Outcome::NavigationFailed {
                    action: NavAction::Search,
                    error,
                },
            },
            Some(MemberChoice::LogOut) => {
                self.active = None;
                info!("{} logged out", name);
                Outcome::LoggedOut {
                    username: name,
                    admin: false,
                }
            }
            None => {
                debug!("invalid user menu choice {:?}", input);
                Outcome::InvalidChoice { input: &input }
            }
        };
        self.renderer.emit(&outcome)?;
        Ok(Flow::Continue)
    }

    fn admin_menu(&mut self) -> Result<Flow> {
        self.renderer.menu("ADMIN MENU", AdminChoice::ITEMS)?;
        let Some(input) = self.ask("Choice: ")? else {
            return Ok(Flow::Exit);
        };
        let choice = AdminChoice::parse(&input);

        let target = if choice == Some(AdminChoice::ViewHistory) {
            match self.ask("Enter username to view history: ")? {
                Some(target) => target,
                None => return Ok(Flow::Exit),
            }
        } else {
            String::new()
        };

        let outcome = match choice {
            Some(AdminChoice::ListUsers) => Outcome::Users {
                names: self.directory.names().collect(),
            },
            Some(AdminChoice::ViewHistory) => match self.directory.lookup(&target) {
                Ok(user) => match user.navigation().list_all() {
                    Ok(entries) => Outcome::History {
                        owner: user.username(),
                        entries: entries.collect(),
                    },
                    Err(error) => Outcome::NavigationFailed {
                        action: NavAction::History,
                        error,
                    },
                },
                Err(error) => Outcome::DirectoryFailed {
                    action: UserAction::ViewHistory,
                    error,
                },
            },
            Some(AdminChoice::LogOut) => {
                self.active = None;
                info!("admin logged out");
                Outcome::LoggedOut {
                    username: self.directory.admin_name(),
                    admin: true,
                }
            }
            None => {
                debug!("invalid admin menu choice {:?}", input);
                Outcome::InvalidChoice { input: &input }
            }
        };
        self.renderer.emit(&outcome)?;
        Ok(Flow::Continue)
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        self.renderer.prompt(prompt)?;
        self.read_token()
    }

    /// First whitespace-separated token of the next line, `None` at end of input.
    fn read_token(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            info!("end of input");
            return Ok(None);
        }
        let token = line.split_whitespace().next().unwrap_or_default();
        Ok(Some(token.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> (String, Option<Identity>, Vec<String>) {
        let settings = Settings {
            color: false,
            ..Settings::default()
        };
        let mut session = Session::new(&settings, Cursor::new(script.to_string()), Vec::new());
        session.run().unwrap();
        let active = session.active().cloned();
        let names = session.directory().names().map(String::from).collect();
        let out = String::from_utf8(session.into_output()).unwrap();
        (out, active, names)
    }

    #[test]
    fn test_signup_login_and_browse() {
        let (out, active, names) = run("1\nalice\n2\nalice\n1\nx.com\n1\ny.com\n2\n4\n3\n");

        assert_eq!(names, vec!["alice"]);
        assert!(out.contains("[OK] User created. You can now log in."));
        assert!(out.contains("[OK] Welcome, alice"));
        assert!(out.contains("=== USER MENU (alice) ==="));
        assert!(out.contains("[OK] Visited: y.com"));
        assert!(out.contains("<- Back to: x.com"));
        assert!(out.contains("[Current Page] x.com"));
        assert!(out.contains("-> Forward to: y.com"));
        assert_eq!(active, Some(Identity::Member("alice".to_string())));
    }

    #[test]
    fn test_exit_choice_says_goodbye() {
        let (out, active, _) = run("3\n1\nnever\n");

        assert!(out.contains("[OK] Exiting program. Bye!"));
        assert!(!out.contains("User created"));
        assert_eq!(active, None);
    }

    #[test]
    fn test_duplicate_signup_and_unknown_login() {
        let (out, _, names) = run("1\nbob\n1\nbob\n2\ncarol\n");

        assert_eq!(names, vec!["bob"]);
        assert!(out.contains("[X] Username already exists!"));
        assert!(out.contains("[X] No such user. Please sign up first."));
    }

    #[test]
    fn test_admin_cannot_sign_up_but_can_log_in() {
        let (out, active, names) = run("1\nadmin\n2\nadmin\n");

        assert!(names.is_empty());
        assert!(out.contains("[X] Username \"admin\" is reserved!"));
        assert!(out.contains("[OK] Logged in as ADMIN"));
        assert_eq!(active, Some(Identity::Admin));
    }

    #[test]
    fn test_logout_returns_to_main_menu() {
        let (out, active, _) = run("1\ndan\n2\ndan\n8\n");

        assert!(out.contains("[!] Logged out from dan"));
        assert!(out.ends_with("Choice: "));
        assert_eq!(active, None);
    }

    #[test]
    fn test_invalid_choices_reprompt() {
        let (out, _, _) = run("9\n1\neve\n2\neve\nabc\n8\n2\nadmin\n7\n");

        assert_eq!(out.matches("[X] Invalid choice!").count(), 3);
    }

    #[test]
    fn test_search_and_clear_from_menu() {
        let (out, _, _) = run("1\nfay\n2\nfay\n1\na.com\n1\nb.com\n1\nab.com\n7\na\n7\nz\n6\n6\n5\n");

        assert!(out.contains("[OK] Found \"a\" at position 1 (a.com)"));
        assert!(out.contains("[OK] Found \"a\" at position 3 (ab.com)"));
        assert!(out.contains("[X] \"z\" not found in history"));
        assert!(out.contains("[OK] All browsing history cleared!"));
        assert!(out.contains("[!] History is already empty!"));
        assert!(out.contains("[X] No browsing history"));
    }
}
