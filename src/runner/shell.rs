//! Menu loop: draw, read a choice, run the action, repeat.
//!
//! The shell is generic over its input and output so sessions can be
//! scripted in tests. Arguments are read one per line and trimmed. End of
//! input at any prompt ends the session as if `0` had been chosen.

use std::io::{self, BufRead, Write};

use console::{style, Term};

use crate::app::Explorer;
use crate::errors::render_error;
use crate::fs_op::traverse::TraversalEvent;
use crate::ui::format::{format_entry_line, format_size};
use crate::ui::menu::{render_banner, render_menu, MenuChoice};

/// Presentation switches for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellOptions {
    /// Clear the terminal before each menu (needs a screen, see
    /// [`Shell::with_screen`]).
    pub clear_screen: bool,
    /// Wait for Enter after each action.
    pub pause: bool,
}

impl Default for ShellOptions {
    fn default() -> Self {
        ShellOptions {
            clear_screen: true,
            pause: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Shell<R, W> {
    explorer: Explorer,
    input: R,
    out: W,
    options: ShellOptions,
    screen: Option<Term>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(explorer: Explorer, input: R, out: W, options: ShellOptions) -> Self {
        Shell {
            explorer,
            input,
            out,
            options,
            screen: None,
        }
    }

    /// Terminal used for clearing the screen.
    pub fn with_screen(mut self, term: Term) -> Self {
        self.screen = Some(term);
        self
    }

    pub fn explorer(&self) -> &Explorer {
        &self.explorer
    }

    /// Give back the output sink (used by tests to inspect the transcript).
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.clear()?;
            write!(self.out, "{}\n{}", render_banner(), render_menu())?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                break;
            };
            let flow = match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => break,
                Some(choice) => self.dispatch(choice)?,
                None => {
                    writeln!(self.out, "Invalid choice. Try again.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit || (self.options.pause && !self.pause()?) {
                break;
            }
            writeln!(self.out, "\n{}", "-".repeat(52))?;
        }
        writeln!(self.out, "\nExiting File Explorer. Goodbye!")?;
        self.out.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        if !self.options.clear_screen {
            return Ok(());
        }
        if let Some(term) = &self.screen {
            self.out.flush()?;
            term.clear_screen()?;
        }
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;
        self.read_line()
    }

    // false when input ended while waiting
    fn pause(&mut self) -> io::Result<bool> {
        let label = style("Press Enter to continue...").blue().bold().to_string();
        Ok(self.prompt(&format!("\n{}", label))?.is_some())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        match choice {
            MenuChoice::Exit => Ok(Flow::Quit),
            MenuChoice::List => self.list(),
            MenuChoice::ShowPath => self.show_path(),
            MenuChoice::ChangeDirectory => self.change_directory(),
            MenuChoice::CreateFile => self.create_file(),
            MenuChoice::DeleteFile => self.delete_file(),
            MenuChoice::Rename => self.rename(),
            MenuChoice::Copy => self.copy(),
            MenuChoice::Search => self.search(),
            MenuChoice::ShowPermissions => self.show_permissions(),
            MenuChoice::ChangePermissions => self.change_permissions(),
        }
    }

    fn list(&mut self) -> io::Result<Flow> {
        writeln!(self.out)?;
        let mut shown = 0usize;
        for ev in self.explorer.list() {
            match ev {
                TraversalEvent::Entry(e) => {
                    writeln!(self.out, "{}", format_entry_line(&e))?;
                    shown += 1;
                }
                TraversalEvent::Unreadable { path, error } => {
                    writeln!(self.out, "Unable to open directory {}: {}", path.display(), error)?;
                }
                TraversalEvent::Found(_) => {}
            }
        }
        if shown == 0 {
            writeln!(self.out, "(no entries)")?;
        }
        Ok(Flow::Continue)
    }

    fn show_path(&mut self) -> io::Result<Flow> {
        let cwd = self.explorer.cwd().display().to_string();
        writeln!(self.out, "\nCurrent directory: {}", style(cwd).green().bold())?;
        Ok(Flow::Continue)
    }

    fn change_directory(&mut self) -> io::Result<Flow> {
        let Some(target) = self.prompt("\nEnter directory to navigate: ")? else {
            return Ok(Flow::Quit);
        };
        match self.explorer.change_directory(&target) {
            Ok(p) => {
                let p = p.display().to_string();
                writeln!(self.out, "Moved to directory: {}", p)?
            }
            Err(e) => writeln!(self.out, "{}", render_error("changing directory", &e))?,
        }
        Ok(Flow::Continue)
    }

    fn create_file(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompt("\nEnter filename to create: ")? else {
            return Ok(Flow::Quit);
        };
        match self.explorer.create_file(&name) {
            Ok(_) => writeln!(self.out, "File '{}' created successfully.", name)?,
            Err(e) => writeln!(self.out, "{}", render_error("creating file", &e))?,
        }
        Ok(Flow::Continue)
    }

    fn delete_file(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompt("\nEnter filename to delete: ")? else {
            return Ok(Flow::Quit);
        };
        match self.explorer.delete_file(&name) {
            Ok(_) => writeln!(self.out, "File '{}' deleted successfully.", name)?,
            Err(e) => writeln!(self.out, "{}", render_error("deleting file", &e))?,
        }
        Ok(Flow::Continue)
    }

    fn rename(&mut self) -> io::Result<Flow> {
        let Some(old) = self.prompt("\nEnter existing filename: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(new) = self.prompt("Enter new filename or path: ")? else {
            return Ok(Flow::Quit);
        };
        match self.explorer.rename(&old, &new) {
            Ok(_) => writeln!(self.out, "File renamed/moved successfully.")?,
            Err(e) => writeln!(self.out, "{}", render_error("renaming/moving file", &e))?,
        }
        Ok(Flow::Continue)
    }

    fn copy(&mut self) -> io::Result<Flow> {
        let Some(src) = self.prompt("\nEnter source file: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(dst) = self.prompt("Enter destination file: ")? else {
            return Ok(Flow::Quit);
        };
        match self.explorer.copy(&src, &dst) {
            Ok(n) => writeln!(self.out, "File copied successfully ({}).", format_size(n))?,
            Err(e) => writeln!(self.out, "{}", render_error("copying file", &e))?,
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompt("\nEnter filename to search: ")? else {
            return Ok(Flow::Quit);
        };
        let hits = match self.explorer.search(&name) {
            Ok(t) => t,
            Err(e) => {
                writeln!(self.out, "{}", render_error("searching", &e))?;
                return Ok(Flow::Continue);
            }
        };
        let mut found = 0usize;
        // Unreadable directories are skipped quietly during search.
        for ev in hits {
            if let TraversalEvent::Found(p) = ev {
                writeln!(self.out, "Found: {}", p.display())?;
                found += 1;
            }
        }
        if found == 0 {
            writeln!(self.out, "No matches for '{}'.", name)?;
        }
        Ok(Flow::Continue)
    }

    fn show_permissions(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompt("\nEnter filename: ")? else {
            return Ok(Flow::Quit);
        };
        match self.explorer.show_permissions(&name) {
            Ok(info) => writeln!(self.out, "Permissions: {} ({})", info.symbolic(), info.octal())?,
            Err(e) => writeln!(self.out, "{}", render_error("reading permissions", &e))?,
        }
        Ok(Flow::Continue)
    }

    fn change_permissions(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompt("\nEnter filename: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(mode) = self.prompt("Enter permission mode (e.g., 777): ")? else {
            return Ok(Flow::Quit);
        };
        match self.explorer.change_permissions(&name, &mode) {
            Ok(_) => writeln!(self.out, "Permissions updated.")?,
            Err(e) => writeln!(self.out, "{}", render_error("changing permissions", &e))?,
        }
        Ok(Flow::Continue)
    }
}
