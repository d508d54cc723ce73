use std::fmt::Display;
use std::io::{self, Write};

use crate::browser::{Boundary, NavigationError};
use crate::config::{OutputFormat, Settings};
use crate::users::DirectoryError;

use super::outcome::{NavAction, Outcome, UserAction};

const GREEN: &str = "\x1b[1;32m";
const RED: &str = "\x1b[1;31m";
const YELLOW: &str = "\x1b[1;33m";
const CYAN: &str = "\x1b[1;36m";
const RESET: &str = "\x1b[0m";

/// Writes menus, prompts and outcomes to the console.
pub struct Renderer<W: Write> {
    out: W,
    format: OutputFormat,
    color: bool,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, settings: &Settings) -> Self {
        Self {
            out,
            format: settings.format,
            color: settings.use_color(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Menus are only shown in the text format.
    pub fn menu(&mut self, title: &str, items: &[&str]) -> io::Result<()> {
        if self.format != OutputFormat::Text {
            return Ok(());
        }
        let title = self.paint(CYAN, format!("=== {} ===", title));
        writeln!(self.out, "\n{}", title)?;
        for (index, item) in items.iter().enumerate() {
            writeln!(self.out, "[{}] {}", index + 1, item)?;
        }
        Ok(())
    }

    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        if self.format != OutputFormat::Text {
            return Ok(());
        }
        write!(self.out, "{}", text)?;
        self.out.flush()
    }

    pub fn emit(&mut self, outcome: &Outcome<'_>) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, outcome)?;
                writeln!(self.out)?;
            }
            OutputFormat::Text => self.text(outcome)?,
        }
        self.out.flush()
    }

    fn text(&mut self, outcome: &Outcome<'_>) -> io::Result<()> {
        let line = match outcome {
            Outcome::SignedUp { .. } => self.paint(GREEN, "[OK] User created. You can now log in."),
            Outcome::LoggedIn { admin: true, .. } => self.paint(GREEN, "[OK] Logged in as ADMIN"),
            Outcome::LoggedIn { username, .. } => {
                self.paint(GREEN, format!("[OK] Welcome, {}", username))
            }
            Outcome::LoggedOut { admin: true, .. } => {
                self.paint(YELLOW, "[!] Logged out from ADMIN")
            }
            Outcome::LoggedOut { username, .. } => {
                self.paint(YELLOW, format!("[!] Logged out from {}", username))
            }
            Outcome::Visited { url } => self.paint(GREEN, format!("[OK] Visited: {}", url)),
            Outcome::WentBack { url } => self.paint(CYAN, format!("<- Back to: {}", url)),
            Outcome::WentForward { url } => self.paint(CYAN, format!("-> Forward to: {}", url)),
            Outcome::Current { url } => self.paint(GREEN, format!("[Current Page] {}", url)),
            Outcome::History { entries, .. } => {
                let title = self.paint(CYAN, "=== FULL BROWSING HISTORY ===");
                writeln!(self.out, "\n{}", title)?;
                for entry in entries {
                    if entry.is_current {
                        let url = self.paint(GREEN, entry.url);
                        writeln!(self.out, "{}. [{}] <-- CURRENT", entry.position, url)?;
                    } else {
                        writeln!(self.out, "{}. [{}]", entry.position, entry.url)?;
                    }
                }
                return Ok(());
            }
            Outcome::Found { keyword, hits } => {
                for hit in hits {
                    let line = self.paint(
                        GREEN,
                        format!(
                            "[OK] Found \"{}\" at position {} ({})",
                            keyword, hit.position, hit.url
                        ),
                    );
                    writeln!(self.out, "{}", line)?;
                }
                return Ok(());
            }
            Outcome::Cleared { .. } => self.paint(GREEN, "[OK] All browsing history cleared!"),
            Outcome::Users { names } => {
                let title = self.paint(CYAN, "Registered Users:");
                writeln!(self.out, "{}", title)?;
                for name in names {
                    writeln!(self.out, "- {}", name)?;
                }
                return Ok(());
            }
            Outcome::NavigationFailed { action, error } => self.navigation_error(*action, error),
            Outcome::DirectoryFailed { action, error } => self.directory_error(*action, error),
            Outcome::InvalidChoice { .. } => self.paint(RED, "[X] Invalid choice!"),
            Outcome::Goodbye => self.paint(GREEN, "[OK] Exiting program. Bye!"),
        };
        writeln!(self.out, "{}", line)
    }

    fn navigation_error(&self, action: NavAction, error: &NavigationError) -> String {
        match error {
            NavigationError::EmptyHistory => {
                let text = match action {
                    NavAction::Back | NavAction::Forward => "[X] No history available!",
                    NavAction::Current => "[X] No page open",
                    _ => "[X] No browsing history",
                };
                self.paint(RED, text)
            }
            NavigationError::AtBoundary { edge } => {
                let text = match edge {
                    Boundary::Start => "[!] Already at the first page!",
                    Boundary::End => "[!] Already at the latest page!",
                };
                self.paint(YELLOW, text)
            }
            NavigationError::NotFound { keyword } => {
                self.paint(RED, format!("[X] \"{}\" not found in history", keyword))
            }
            NavigationError::AlreadyEmpty => self.paint(YELLOW, "[!] History is already empty!"),
        }
    }

    fn directory_error(&self, action: UserAction, error: &DirectoryError) -> String {
        let text = match error {
            DirectoryError::DuplicateUser { .. } => "[X] Username already exists!".to_string(),
            DirectoryError::UserNotFound { .. } if action == UserAction::LogIn => {
                "[X] No such user. Please sign up first.".to_string()
            }
            DirectoryError::UserNotFound { .. } => "[X] No such user.".to_string(),
            DirectoryError::ReservedName { username } => {
                format!("[X] Username \"{}\" is reserved!", username)
            }
            DirectoryError::EmptyUsername => "[X] Username must not be empty!".to_string(),
        };
        self.paint(RED, text)
    }

    fn paint(&self, color: &str, text: impl Display) -> String {
        if self.color {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::HistoryEntry;

    fn plain() -> Settings {
        Settings {
            color: false,
            ..Settings::default()
        }
    }

    fn render(settings: &Settings, outcome: &Outcome<'_>) -> String {
        let mut renderer = Renderer::new(Vec::new(), settings);
        renderer.emit(outcome).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_history_listing_marks_current() {
        let outcome = Outcome::History {
            owner: "alice",
            entries: vec![
                HistoryEntry { position: 1, url: "x.com", is_current: false },
                HistoryEntry { position: 2, url: "z.com", is_current: true },
            ],
        };

        assert_eq!(
            render(&plain(), &outcome),
            "\n=== FULL BROWSING HISTORY ===\n1. [x.com]\n2. [z.com] <-- CURRENT\n"
        );
    }

    #[test]
    fn test_empty_history_wording_depends_on_action() {
        let back = Outcome::NavigationFailed {
            action: NavAction::Back,
            error: NavigationError::EmptyHistory,
        };
        let current = Outcome::NavigationFailed {
            action: NavAction::Current,
            error: NavigationError::EmptyHistory,
        };

        assert_eq!(render(&plain(), &back), "[X] No history available!\n");
        assert_eq!(render(&plain(), &current), "[X] No page open\n");
    }

    #[test]
    fn test_color_wraps_message() {
        let outcome = Outcome::Visited { url: "a.com" };

        assert_eq!(
            render(&Settings::default(), &outcome),
            "\x1b[1;32m[OK] Visited: a.com\x1b[0m\n"
        );
    }

    #[test]
    fn test_json_skips_menus_and_prompts() {
        let settings = Settings {
            format: OutputFormat::Json,
            ..Settings::default()
        };
        let mut renderer = Renderer::new(Vec::new(), &settings);
        renderer.menu("LOGIN MENU", &["Sign up"]).unwrap();
        renderer.prompt("Choice: ").unwrap();
        renderer.emit(&Outcome::Goodbye).unwrap();

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(out, "{\"event\":\"goodbye\"}\n");
    }

    #[test]
    fn test_menu_is_numbered() {
        let mut renderer = Renderer::new(Vec::new(), &plain());
        renderer.menu("ADMIN MENU", &["View all users", "Logout"]).unwrap();

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(out, "\n=== ADMIN MENU ===\n[1] View all users\n[2] Logout\n");
    }
}
