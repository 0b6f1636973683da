use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum Category {
    Work,
    Personal,
    Birthday,
    Meeting,
    Appointment,
    Reminder,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Work,
        Category::Personal,
        Category::Birthday,
        Category::Meeting,
        Category::Appointment,
        Category::Reminder,
        Category::Other,
    ];

    /// Convert enum → file code (0..=6)
    pub fn code(&self) -> i32 {
        match self {
            Category::Work => 0,
            Category::Personal => 1,
            Category::Birthday => 2,
            Category::Meeting => 3,
            Category::Appointment => 4,
            Category::Reminder => 5,
            Category::Other => 6,
        }
    }

    /// Convert file code → enum
    pub fn from_code(code: i32) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Birthday => "Birthday",
            Category::Meeting => "Meeting",
            Category::Appointment => "Appointment",
            Category::Reminder => "Reminder",
            Category::Other => "Other",
        }
    }
}
