//! Built-in item catalog.

use crate::{color::Color, item::Item};

const TECH_LOGOS: [(&str, &str); 13] = [
    ("Next.js", "#ffffff"),
    ("Prisma", "#ffffff"),
    ("TypeScript", "#3178C6"),
    ("Node.js", "#339933"),
    ("Git", "#F05032"),
    ("PostgreSQL", "#4169E1"),
    ("Facebook", "#1877F2"),
    ("React", "#61DAFB"),
    ("JavaScript", "#F7DF1E"),
    ("HTML5", "#E34F26"),
    ("CSS3", "#1572B6"),
    ("Sass", "#CC6699"),
    ("Tailwind CSS", "#06B6D4"),
];

/// Technology logos used when no items are configured, in display order.
pub fn default_items() -> Vec<Item> {
    TECH_LOGOS
        .iter()
        .map(|(name, color)| {
            Item::new(
                *name,
                Color::new(color).expect("catalog colors are valid hex strings"),
            )
        })
        .collect()
}
