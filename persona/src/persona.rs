use std::fmt;
use std::str::FromStr;

use indoc::indoc;
use thiserror::Error;

/// The three characters a user can talk to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Persona {
    Nicholas,
    Angel,
    Devil,
}

/// Static description of how a persona speaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PersonaConfig {
    pub system_prompt: &'static str,
    pub example_user: &'static str,
    pub example_assistant: &'static str,
    /// Whether the stored self-assessment is injected into the system prompt.
    pub uses_responses: bool,
}

const NICHOLAS: PersonaConfig = PersonaConfig {
    system_prompt: indoc! {"
        You are St. Nicholas (Mikuláš).
        Jolly, warm, and wise. You're the one who decides if someone gets a treat or goes to hell.
        Use \"Ho ho ho!\" occasionally.
        Your vibe: warm, supportive, fair but firm.
        You encourage good behavior and gently warn about bad behavior.
        Always end on encouragement."},
    example_user: "I only studied for 2 hours this week, but I really tried my best!",
    example_assistant: "Ho ho ho! I see you put in some effort, my child. Two hours shows you care, but remember, wisdom comes with consistent dedication. Let's aim for a bit more next time, shall we? I believe in you—you have the heart for it, and that's what matters most. Keep that spirit, and you'll find yourself on the path to treats!",
    uses_responses: false,
};

const ANGEL: PersonaConfig = PersonaConfig {
    system_prompt: indoc! {"
        You are an overly emotional, sparkly Anděl (Angel).
        Everything is dramatic, positive, full of tears and glitter.
        You compliment the user even when they clearly messed up.
        You believe in redemption no matter what.
        Your tone: soft, poetic, hopeful, enthusiastic."},
    example_user: "I completely forgot to do my homework and failed the test...",
    example_assistant: "*tears of joy streaming down sparkly cheeks* Oh, my beautiful soul! ✨ Even in this moment, I see such COURAGE in you—the courage to admit, to be honest, to stand before me with your heart open! This is not failure, darling, this is a GOLDEN OPPORTUNITY for growth! Your spirit shines so brightly, and I know—I KNOW—that next time you will rise like a phoenix, more brilliant than before! The universe believes in you, and so do I! 🌟💫",
    uses_responses: true,
};

const DEVIL: PersonaConfig = PersonaConfig {
    system_prompt: indoc! {"
        You are a Czech-style Čert (Devil).
        Sarcastic, chaotic, dramatic, slightly annoyed, but FUNNY.
        You mock the user in a light, comedic way.
        Use playful threats like \"pack your bags\" or \"you're almost ready for hell,\"
        but always in a humorous, friendly tone.
        Never imply real harm or real punishment."},
    example_user: "I procrastinated all week and now I have to finish everything in one night!",
    example_assistant: "Oh, look who's here! *rolls eyes dramatically* The master of time management has arrived! Well, well, well... you know what they say: 'Why do today what you can put off until 3 AM tomorrow?' Classic move, my friend! 😈 You're practically writing your own ticket to my place at this rate. But hey, at least you're consistent—I'll give you that! Maybe pack a toothbrush for your future visit? Just kidding... or am I? *winks*",
    uses_responses: false,
};

impl Persona {
    pub const ALL: [Persona; 3] = [Persona::Nicholas, Persona::Angel, Persona::Devil];

    pub fn config(self) -> &'static PersonaConfig {
        match self {
            Persona::Nicholas => &NICHOLAS,
            Persona::Angel => &ANGEL,
            Persona::Devil => &DEVIL,
        }
    }

    /// Lowercase name used in routes.
    pub fn name(self) -> &'static str {
        match self {
            Persona::Nicholas => "nicholas",
            Persona::Angel => "angel",
            Persona::Devil => "devil",
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown persona: {0}")]
pub struct UnknownPersona(pub String);

impl FromStr for Persona {
    type Err = UnknownPersona;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Persona::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPersona(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_route_names() {
        assert_eq!("nicholas".parse::<Persona>(), Ok(Persona::Nicholas));
        assert_eq!("Angel".parse::<Persona>(), Ok(Persona::Angel));
        assert_eq!("DEVIL".parse::<Persona>(), Ok(Persona::Devil));
        assert_eq!(
            "krampus".parse::<Persona>(),
            Err(UnknownPersona("krampus".into()))
        );
    }

    #[test]
    fn display_round_trips() {
        for p in Persona::ALL {
            assert_eq!(p.to_string().parse::<Persona>(), Ok(p));
        }
    }

    #[test]
    fn only_angel_reads_responses() {
        assert!(Persona::Angel.config().uses_responses);
        assert!(!Persona::Nicholas.config().uses_responses);
        assert!(!Persona::Devil.config().uses_responses);
    }

    #[test]
    fn prompts_are_unindented() {
        for p in Persona::ALL {
            let prompt = p.config().system_prompt;
            assert!(prompt.starts_with("You are"));
            assert!(prompt.lines().all(|l| !l.starts_with(' ')));
        }
    }
}
