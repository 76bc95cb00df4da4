//! CLI Mnemonica drill example.

use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use stackdrill::{
    Accuracy, Card, CycleOutcome, CyclePhase, Drill, DrillKind, DrillMode, DrillView, Face,
    Outcome, Stack,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    println!("Mnemonica drills (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    loop {
        let choice = prompt_line("\n[m]anual, [a]uto, [f]lashcards, [s]how stack, [q]uit: ");
        let mode = match choice.as_str() {
            "m" | "manual" => DrillMode::Manual,
            "a" | "auto" => DrillMode::Auto,
            "f" | "flashcards" => DrillMode::Flashcard,
            "s" | "stack" => {
                print_stack();
                continue;
            }
            "q" | "quit" | "" => break,
            _ => {
                println!("Unknown choice.");
                continue;
            }
        };

        let drill = match Drill::mnemonica(mode, seed) {
            Ok(drill) => drill,
            Err(err) => {
                println!("Cannot start drill: {err}");
                return;
            }
        };
        configure(&drill);

        match mode {
            DrillMode::Manual => run_manual(&drill),
            DrillMode::Auto => run_auto(&drill),
            DrillMode::Flashcard => run_flashcards(&drill),
        }
    }

    println!("Goodbye.");
}

fn configure(drill: &Drill) {
    let kind = match prompt_line("Direction: [p]osition→card, [c]ard→position, [x] mixed: ").as_str()
    {
        "p" => DrillKind::PositionToCard,
        "c" => DrillKind::CardToPosition,
        _ => DrillKind::Mixed,
    };
    drill.configure_kind(kind);

    loop {
        let Some(start) = prompt_u8("Start position (1-52): ") else {
            return;
        };
        let Some(end) = prompt_u8("End position (1-52): ") else {
            return;
        };
        match drill.configure_range(start, end) {
            Ok(range) => {
                println!("Drilling positions {}-{}.", range.start(), range.end());
                return;
            }
            Err(err) => println!("{err}"),
        }
    }
}

fn run_manual(drill: &Drill) {
    loop {
        let view = drill.new_question(None);
        print_question(&view);

        let answer = loop {
            let answer = prompt_line("Your answer ('r' reveals, 'q' ends): ");
            if answer != "r" && answer != "reveal" {
                break answer;
            }
            if let Ok(face) = drill.reveal() {
                println!("Answer: {}", format_face(face));
            }
        };
        if answer == "q" || answer == "quit" {
            break;
        }

        match drill.submit_answer(&answer) {
            Ok(view) => {
                if let Some(feedback) = view.feedback {
                    match feedback.outcome {
                        Outcome::Correct => println!("{}", colorize("Correct!", "32")),
                        Outcome::Incorrect => println!(
                            "{} Correct answer is: {}",
                            colorize("Incorrect.", "31"),
                            format_face(feedback.answer)
                        ),
                    }
                }
                print_stats(&view);
            }
            Err(err) => println!("{err}"),
        }
    }
}

fn run_auto(drill: &Drill) {
    let Some(interval) = prompt_u8("Thinking time in seconds (1-60): ") else {
        return;
    };
    let view = match drill.start_auto_session(interval) {
        Ok(view) => view,
        Err(err) => {
            println!("{err}");
            return;
        }
    };
    println!("Press Enter to stop.");
    print_question(&view);

    thread::scope(|scope| {
        scope.spawn(|| {
            loop {
                let mut shown = false;
                let outcome = drill.run_auto_cycle(|phase, left| match phase {
                    CyclePhase::Think => println!("Think for: {left} seconds…"),
                    CyclePhase::Pause => {
                        if !shown {
                            shown = true;
                            if let Some(face) = drill.view().revealed {
                                println!("Time! Answer: {}", format_face(face));
                            }
                        }
                        println!("Next question in: {left} seconds…");
                    }
                });
                match outcome {
                    CycleOutcome::Advanced(view) => print_question(&view),
                    CycleOutcome::Stopped => break,
                }
            }
        });

        let _ = prompt_line("");
        let view = drill.stop_auto_session();
        println!(
            "Stopped after {} auto questions.",
            view.stats.rounds_completed
        );
    });
}

fn run_flashcards(drill: &Drill) {
    let mut view = drill.view();
    loop {
        print_question(&view);
        let input = prompt_line("Enter flips, 'n' next card, 'q' ends: ");
        match input.as_str() {
            "q" | "quit" => break,
            "n" | "next" => view = drill.new_question(None),
            _ => {
                if let Ok(face) = drill.reveal() {
                    println!("Back: {}", format_face(face));
                }
                continue;
            }
        }
        println!("Cards reviewed: {}", view.stats.cards_reviewed);
    }
}

fn print_question(view: &DrillView) {
    let Some(question) = view.question else {
        return;
    };
    match question.front() {
        Face::Position(position) => println!("\nPosition: {position} → card?"),
        Face::Card(card) => println!("\nCard: {} → position?", format_card(card)),
    }
}

fn print_stats(view: &DrillView) {
    let stats = view.stats;
    match stats.accuracy() {
        Accuracy::NoData => println!("Attempts: 0"),
        Accuracy::Percent(_) => println!(
            "Attempts: {}  Accuracy: {}/{} ({}%)",
            stats.attempts,
            stats.correct,
            stats.attempts,
            stats.accuracy().rounded_percent().unwrap_or(0)
        ),
    }
}

fn print_stack() {
    let Ok(stack) = Stack::mnemonica() else {
        println!("Built-in stack is invalid.");
        return;
    };
    println!("Top of deck = position 1");
    for (position, card) in stack.iter() {
        println!("{position:2}: {}", format_card(card));
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_u8(prompt: &str) -> Option<u8> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<u8>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn format_face(face: Face) -> String {
    match face {
        Face::Position(position) => position.to_string(),
        Face::Card(card) => format_card(card),
    }
}

fn format_card(card: Card) -> String {
    let color_code = if card.suit.is_red() { "31" } else { "34" };
    colorize(&card.pretty().to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
