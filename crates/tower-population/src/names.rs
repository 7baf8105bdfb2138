//! Name tables for generated residents.

pub const FIRST_NAMES: &[&str] = &[
    "Avery", "Jordan", "Morgan", "Taylor", "Cameron", "Riley", "Casey", "Sydney", "Devon",
    "Elliot", "Kai", "Logan", "Micah", "Parker", "Reese", "Sage", "Skylar", "Rowan", "Hayden",
    "Quinn",
];

pub const LAST_NAMES: &[&str] = &[
    "Anderson", "Bennett", "Chen", "Das", "Edwards", "Fischer", "Garcia", "Hughes", "Ivanov",
    "Jackson", "Kim", "Liu", "Martinez", "Novak", "O'Neal", "Patel", "Rivera", "Singh",
    "Thompson", "Williams",
];
