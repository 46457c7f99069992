//! Main menu options.

use std::fmt::Write as _;

use strum::{EnumCount, EnumIter, EnumMessage, FromRepr, IntoEnumIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, EnumIter, EnumCount, EnumMessage)]
#[repr(u8)]
pub enum MenuChoice {
    #[strum(message = "Register a new course")]
    Register = 1,
    #[strum(message = "Show all courses and grades")]
    List,
    #[strum(message = "Calculate overall average")]
    Average,
    #[strum(message = "Count passed and failed courses")]
    PassFail,
    #[strum(message = "Search course by name (linear search)")]
    LinearSearch,
    #[strum(message = "Update a course grade")]
    Update,
    #[strum(message = "Delete a course")]
    Delete,
    #[strum(message = "Sort courses by grade (bubble sort)")]
    SortByGrade,
    #[strum(message = "Sort courses by name (insertion sort)")]
    SortByName,
    #[strum(message = "Search course by name (binary search)")]
    BinarySearch,
    #[strum(message = "Simulate review request queue")]
    ReviewQueue,
    #[strum(message = "Show change history")]
    History,
    #[strum(message = "Export courses as JSON")]
    ExportJson,
    #[strum(message = "Exit")]
    Exit,
}

impl MenuChoice {
    /// Parse the number typed at the menu prompt.
    pub fn parse(input: &str) -> Option<Self> {
        input.trim().parse::<u8>().ok().and_then(Self::from_repr)
    }

    pub fn label(&self) -> &'static str {
        self.get_message().unwrap_or_default()
    }
}

pub fn render() -> String {
    let rule = "=".repeat(50);
    let mut output = String::new();
    let _ = writeln!(output, "\n{}", rule);
    let _ = writeln!(output, "{:^50}", "GRADEBOOK");
    let _ = writeln!(output, "{}", rule);
    for choice in MenuChoice::iter() {
        let _ = writeln!(output, "{}. {}", choice as u8, choice.label());
    }
    let _ = writeln!(output, "{}", "-".repeat(50));
    output
}
