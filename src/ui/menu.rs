//! Numbered main menu: labels, rendering and choice parsing.

use console::style;

/// An action selectable from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    List,
    ShowPath,
    ChangeDirectory,
    CreateFile,
    DeleteFile,
    Rename,
    Copy,
    Search,
    ShowPermissions,
    ChangePermissions,
}

impl MenuChoice {
    /// Menu order, index == menu number.
    pub const ALL: [MenuChoice; 11] = [
        MenuChoice::Exit,
        MenuChoice::List,
        MenuChoice::ShowPath,
        MenuChoice::ChangeDirectory,
        MenuChoice::CreateFile,
        MenuChoice::DeleteFile,
        MenuChoice::Rename,
        MenuChoice::Copy,
        MenuChoice::Search,
        MenuChoice::ShowPermissions,
        MenuChoice::ChangePermissions,
    ];

    /// Parse the user's typed number. Anything else is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let n: usize = input.trim().parse().ok()?;
        Self::ALL.get(n).copied()
    }

    pub fn number(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Exit => "Exit",
            MenuChoice::List => "List Files (Recursive)",
            MenuChoice::ShowPath => "Show Current Path",
            MenuChoice::ChangeDirectory => "Change Directory",
            MenuChoice::CreateFile => "Create New File",
            MenuChoice::DeleteFile => "Delete File",
            MenuChoice::Rename => "Rename / Move File",
            MenuChoice::Copy => "Copy File",
            MenuChoice::Search => "Search File",
            MenuChoice::ShowPermissions => "Show File Permissions",
            MenuChoice::ChangePermissions => "Change File Permissions",
        }
    }
}

/// Menu labels in display order (1..=10, then 0).
pub fn menu_labels() -> Vec<String> {
    MenuChoice::ALL[1..]
        .iter()
        .chain(std::iter::once(&MenuChoice::Exit))
        .map(|c| format!("{:>2}. {}", c.number(), c.label()))
        .collect()
}

pub fn render_banner() -> String {
    let rule = "=".repeat(44);
    format!(
        "{}\n{}\n{}\n",
        style(&rule).cyan().bold(),
        style("         Linux File Explorer").cyan().bold(),
        style(&rule).cyan().bold()
    )
}

pub fn render_menu() -> String {
    let rule = "=".repeat(52);
    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    for l in menu_labels() {
        out.push_str(&l);
        out.push('\n');
    }
    out.push_str(&rule);
    out.push('\n');
    out
}
