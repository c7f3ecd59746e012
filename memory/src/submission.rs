use serde::Deserialize;

/// Question labels, in the order their answers are stored.
pub const QUESTIONS: [&str; 4] = [
    "Q1 — How did you handle your first assignment in this course?",
    "Q2 — When you didn't understand something, what did you do?",
    "Q3 — How do you engage in class?",
    "Q4 — How many hours did you spend on the assignment?",
];

/// Answers to the four self-assessment questions, as submitted.
///
/// `q4` holds the hours answer as received; it is never parsed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Submission {
    pub q1: String,
    pub q2: String,
    pub q3: String,
    pub q4: String,
}

impl Submission {
    pub fn new(
        q1: impl Into<String>,
        q2: impl Into<String>,
        q3: impl Into<String>,
        q4: impl Into<String>,
    ) -> Self {
        Self {
            q1: q1.into(),
            q2: q2.into(),
            q3: q3.into(),
            q4: q4.into(),
        }
    }

    fn answers(&self) -> [(&'static str, &str); 4] {
        [
            ("q1", &self.q1),
            ("q2", &self.q2),
            ("q3", &self.q3),
            ("q4", &self.q4),
        ]
    }

    /// Names of the fields left empty.
    pub fn missing(&self) -> Vec<&'static str> {
        self.answers()
            .into_iter()
            .filter(|(_, answer)| answer.is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    /// Render the labeled text stored on disk.
    pub fn render(&self) -> String {
        QUESTIONS
            .iter()
            .zip(self.answers())
            .map(|(label, (_, answer))| format!("{label}\n{answer}\n"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
