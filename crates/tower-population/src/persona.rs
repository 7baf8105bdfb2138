//! Persona variants: demographics, appearance palettes, schedule shapes.

/// Lifestyle archetype a resident belongs to.
///
/// A closed set: each variant has exactly one schedule builder in
/// [`factory`][crate::factory], plus the demographic and appearance data
/// below.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Persona {
    UrbanProfessional,
    RemoteWorker,
    FamilyParent,
    GradStudent,
    FitnessEnthusiast,
}

/// Appearance color pools, hex strings.
pub struct Palette {
    pub hair: &'static [&'static str],
    pub outfit: &'static [&'static str],
    pub accent: &'static [&'static str],
}

impl Persona {
    pub const ALL: [Persona; 5] = [
        Persona::UrbanProfessional,
        Persona::RemoteWorker,
        Persona::FamilyParent,
        Persona::GradStudent,
        Persona::FitnessEnthusiast,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Persona::UrbanProfessional => "urban_professional",
            Persona::RemoteWorker => "remote_worker",
            Persona::FamilyParent => "family_parent",
            Persona::GradStudent => "grad_student",
            Persona::FitnessEnthusiast => "fitness_enthusiast",
        }
    }

    pub fn occupations(self) -> &'static [&'static str] {
        match self {
            Persona::UrbanProfessional => {
                &["Software Engineer", "Consultant", "Financial Analyst", "Product Manager"]
            }
            Persona::RemoteWorker => &["UX Designer", "Writer", "Data Scientist", "Entrepreneur"],
            Persona::FamilyParent => {
                &["Marketing Manager", "HR Director", "Teacher", "Accountant"]
            }
            Persona::GradStudent => {
                &["Graduate Student", "Teaching Assistant", "Research Assistant"]
            }
            Persona::FitnessEnthusiast => {
                &["Trainer", "Physical Therapist", "Athlete", "Wellness Coach"]
            }
        }
    }

    /// Inclusive age bounds.
    pub fn age_range(self) -> (u8, u8) {
        match self {
            Persona::UrbanProfessional => (25, 42),
            Persona::RemoteWorker => (24, 45),
            Persona::FamilyParent => (32, 52),
            Persona::GradStudent => (22, 30),
            Persona::FitnessEnthusiast => (23, 38),
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Persona::UrbanProfessional => Palette {
                hair: &["#2f2c28", "#4a3826", "#a67b5b", "#c49a6c"],
                outfit: &["#1f6feb", "#2563eb", "#334155"],
                accent: &["#22d3ee", "#a855f7", "#f97316"],
            },
            Persona::RemoteWorker => Palette {
                hair: &["#362c3a", "#5f2f45", "#b36a5e", "#d4a373"],
                outfit: &["#14b8a6", "#0ea5e9", "#f59e0b"],
                accent: &["#ec4899", "#60a5fa", "#facc15"],
            },
            Persona::FamilyParent => Palette {
                hair: &["#3f2f2f", "#623412", "#b07946", "#d9b48f"],
                outfit: &["#f97316", "#ea580c", "#ef4444"],
                accent: &["#22c55e", "#facc15", "#c026d3"],
            },
            Persona::GradStudent => Palette {
                hair: &["#1f2937", "#4b5563", "#9ca3af", "#e5e7eb"],
                outfit: &["#8b5cf6", "#3b82f6", "#14b8a6"],
                accent: &["#f472b6", "#fb7185", "#60a5fa"],
            },
            Persona::FitnessEnthusiast => Palette {
                hair: &["#1f1f1f", "#3b3836", "#6b7280", "#f3f4f6"],
                outfit: &["#22c55e", "#10b981", "#0d9488"],
                accent: &["#facc15", "#f97316", "#ef4444"],
            },
        }
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
