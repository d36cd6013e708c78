//! The emotion-to-snippet template registry.
//!
//! A fixed table from every emotion label to a displayable code template.
//! The registry is total by construction: the lookup is an exhaustive match
//! over the closed label enumeration, and the neutral entry doubles as the
//! universal fallback for anything folded to neutral upstream.

use moodcode_core::EmotionLabel;

/// A pre-written snippet shown for one emotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeTemplate {
    /// Short human-readable title.
    pub title: &'static str,
    /// The snippet body, a self-contained Rust program.
    pub code: &'static str,
}

/// Look up the template for a label. Total: every label has an entry.
pub fn lookup(label: EmotionLabel) -> CodeTemplate {
    match label {
        EmotionLabel::Happy => HAPPY,
        EmotionLabel::Sad => SAD,
        EmotionLabel::Angry => ANGRY,
        EmotionLabel::Fear => FEAR,
        EmotionLabel::Surprise => SURPRISE,
        EmotionLabel::Neutral => NEUTRAL,
    }
}

/// Every (label, template) pair, for listings and tests.
pub fn all() -> impl Iterator<Item = (EmotionLabel, CodeTemplate)> {
    EmotionLabel::ALL.into_iter().map(|label| (label, lookup(label)))
}

const HAPPY: CodeTemplate = CodeTemplate {
    title: "Mini Game: Guess the Number",
    code: r#"// Guess the Number - feel-good mini game
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    let secret = (nanos % 50) + 1;
    let mut tries = 0u32;

    println!("Guess the secret number between 1 and 50. Good luck!");
    loop {
        print!("Your guess: ");
        io::stdout().flush().ok();
        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            continue;
        }
        let guess: u32 = match line.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                println!("Please enter an integer.");
                continue;
            }
        };
        tries += 1;
        if guess == secret {
            println!("Correct! You guessed it in {tries} tries. Well played!");
            break;
        } else if guess < secret {
            println!("Too low!");
        } else {
            println!("Too high!");
        }
    }
}
"#,
};

const SAD: CodeTemplate = CodeTemplate {
    title: "Breathing Exercise (Calm)",
    code: r#"// Breathing exercise - 5 rounds
use std::thread::sleep;
use std::time::Duration;

fn main() {
    println!("Let's do a simple 5-round breathing exercise. Follow the prompts.");
    for round in 1..=5 {
        println!("Round {round}: Breathe in for 4 seconds...");
        sleep(Duration::from_secs(4));
        println!("Hold for 2 seconds...");
        sleep(Duration::from_secs(2));
        println!("Breathe out for 6 seconds...");
        sleep(Duration::from_secs(6));
    }
    println!("Completed. Hope you feel a bit calmer.");
}
"#,
};

const ANGRY: CodeTemplate = CodeTemplate {
    title: "Punching Bag Simulator (Console)",
    code: r#"// Punching bag - energy outlet on the console
use std::io;

fn main() {
    println!("Type 'punch' and press enter to hit the virtual bag. Type 'quit' to stop.");
    let mut count = 0u32;
    loop {
        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            break;
        }
        match line.trim().to_lowercase().as_str() {
            "quit" => {
                println!("You released energy {count} times. Take a breath.");
                break;
            }
            "punch" => {
                count += 1;
                println!("Boom! Energy released.");
            }
            _ => println!("Type 'punch' or 'quit'."),
        }
    }
}
"#,
};

const FEAR: CodeTemplate = CodeTemplate {
    title: "Focus Timer (Pomodoro-lite)",
    code: r#"// Focus timer, one short demo session
use std::thread::sleep;
use std::time::Duration;

fn main() {
    println!("Starting a 25-minute focus session. Press Ctrl+C to cancel.");
    // Shortened for the demo; a real session would sleep 25 * 60 seconds.
    sleep(Duration::from_secs(5));
    println!("(Demo) Work period finished. Take a 5-minute break.");
}
"#,
};

const SURPRISE: CodeTemplate = CodeTemplate {
    title: "Random Fun Fact (Surprise)",
    code: r#"// Random fun facts - small list
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    let facts = [
        "Honey never spoils.",
        "A day on Venus is longer than a year on Venus.",
        "Bananas are berries, but strawberries are not.",
    ];
    let pick = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as usize)
        .unwrap_or(0)
        % facts.len();
    println!("Here is a surprise fact:");
    println!("{}", facts[pick]);
}
"#,
};

const NEUTRAL: CodeTemplate = CodeTemplate {
    title: "Template: Hello World Script",
    code: r#"// Neutral starter
fn main() {
    println!("Hello world! This is a neutral starter script.");
}
"#,
};
