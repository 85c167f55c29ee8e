use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{BufRead, Write};
use tokio::fs;

use playbook_manager::cli::{Cli, Command};
use playbook_manager::completion::CompletionStore;
use playbook_manager::playbook::{find_playbook_files, load_playbook};
use playbook_manager::quiz::{
    generate_quiz, generate_quiz_with_rng, run_bank_generation, BankConfig, QuizSession,
    PASS_THRESHOLD_PERCENT,
};
use playbook_manager_sdk::{
    log_answer_recorded, log_bank_complete_console, log_bank_start_console, log_quiz_complete,
    log_quiz_start, CompletionStatus, Playbook,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::List { dir } => cmd_list(&dir).await,
        Command::Chapters { playbook, ledger } => cmd_chapters(&playbook, ledger.as_deref()).await,
        Command::Generate {
            playbook,
            chapter,
            seed,
            output,
        } => cmd_generate(&playbook, &chapter, seed, output.as_deref()).await,
        Command::Take {
            playbook,
            chapter,
            ledger,
        } => cmd_take(&playbook, &chapter, ledger.as_deref()).await,
        Command::Bank {
            playbook,
            output_dir,
            batch_size,
            seed,
            chapters,
        } => cmd_bank(&playbook, output_dir, batch_size, seed, chapters).await,
    }
}

async fn cmd_list(dir: &str) -> Result<()> {
    let files = find_playbook_files(dir).await?;
    if files.is_empty() {
        println!("No playbook files found in {}", dir);
        return Ok(());
    }

    for file in files {
        match load_playbook(&file).await {
            Ok(playbook) => println!(
                "{}: {} ({} chapter(s))",
                file,
                playbook.title,
                playbook.chapters.len()
            ),
            Err(e) => println!("{}: not a valid playbook ({:#})", file, e),
        }
    }
    Ok(())
}

async fn cmd_chapters(playbook_path: &str, ledger_path: Option<&str>) -> Result<()> {
    let playbook = load_playbook(playbook_path).await?;
    let store = open_store(ledger_path)?;

    println!("{} ({})", playbook.title, playbook.id);
    for (index, chapter) in playbook.chapters.iter().enumerate() {
        let unlocked = store.is_unlocked(&playbook, index);
        let marker = match store.status(&playbook.id, &chapter.id) {
            CompletionStatus::Passed => "✓",
            CompletionStatus::Failed => "✗",
            CompletionStatus::NotStarted => "·",
        };

        let detail = match store.completion(&playbook.id, &chapter.id) {
            Some(entry) => format!("{}%, {} attempt(s)", entry.score_percent, entry.attempts),
            None if unlocked => "not started".to_string(),
            None => "locked".to_string(),
        };

        println!(
            "  [{}] {}. {} — {} ({})",
            marker,
            index + 1,
            chapter.id,
            chapter.title,
            detail
        );
    }
    Ok(())
}

async fn cmd_generate(
    playbook_path: &str,
    chapter_id: &str,
    seed: Option<u64>,
    output: Option<&str>,
) -> Result<()> {
    let playbook = load_playbook(playbook_path).await?;
    let chapter = require_chapter(&playbook, chapter_id)?;

    let quiz = match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            generate_quiz_with_rng(&chapter.steps, &chapter.title, &mut rng)
        }
        None => generate_quiz(&chapter.steps, &chapter.title),
    };

    if quiz.is_empty() {
        println!(
            "No quiz questions could be generated for chapter '{}'",
            chapter_id
        );
        return Ok(());
    }

    let quiz_yaml = serde_yaml::to_string(&quiz)?;
    match output {
        Some(path) => {
            fs::write(path, &quiz_yaml)
                .await
                .with_context(|| format!("Failed to write quiz file: {}", path))?;
            println!("Quiz saved to: {}", path);
        }
        None => print!("{}", quiz_yaml),
    }
    Ok(())
}

async fn cmd_take(playbook_path: &str, chapter_id: &str, ledger_path: Option<&str>) -> Result<()> {
    let playbook = load_playbook(playbook_path).await?;
    let chapter_index = playbook
        .chapter_index(chapter_id)
        .with_context(|| format!("Unknown chapter id '{}' in playbook '{}'", chapter_id, playbook.id))?;
    let chapter = &playbook.chapters[chapter_index];

    let mut store = open_store(ledger_path)?;
    if !store.is_unlocked(&playbook, chapter_index) {
        let previous = &playbook.chapters[chapter_index - 1];
        bail!(
            "Chapter '{}' is locked. Pass '{}' first.",
            chapter.title,
            previous.title
        );
    }

    let quiz = generate_quiz(&chapter.steps, &chapter.title);
    if quiz.is_empty() {
        println!("No questions available for chapter '{}'.", chapter.title);
        return Ok(());
    }

    let questions = quiz.questions.clone();
    let mut session = QuizSession::new(quiz);
    log_quiz_start!(session.id(), chapter.title, questions.len());

    println!("{} — {} question(s)\n", chapter.title, questions.len());

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    for (number, question) in questions.iter().enumerate() {
        println!("Q{}. {}", number + 1, question.prompt);
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}) {}", option_letter(i), option);
        }

        let choice = read_choice(&mut input, question.options.len())?;
        let correct = session.record_answer(number, choice)?;
        log_answer_recorded!(session.id(), question.id, correct);

        if correct {
            println!("✓ Correct!\n");
        } else {
            println!("✗ Not quite. {}\n", question.explanation);
        }
    }

    let report = session.report();
    log_quiz_complete!(session.id(), chapter.title, report.score_percent, report.passed);

    println!(
        "Score: {}/{} ({}%) — pass mark is {}%",
        report.correct, report.total, report.score_percent, PASS_THRESHOLD_PERCENT
    );
    if report.passed {
        println!("✓ Chapter '{}' passed", chapter.title);
    } else {
        println!("✗ Chapter '{}' not passed. Try again.", chapter.title);
    }

    store.record_attempt(&playbook.id, &chapter.id, &report)?;
    println!("Result recorded in {}", store.path().display());
    Ok(())
}

async fn cmd_bank(
    playbook_path: &str,
    output_dir: String,
    batch_size: usize,
    seed: Option<u64>,
    chapters: Option<String>,
) -> Result<()> {
    let playbook = load_playbook(playbook_path).await?;
    let config = BankConfig {
        output_dir,
        batch_size,
        seed,
        chapters: chapters.map(|list| {
            list.split(',')
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty())
                .collect()
        }),
    };

    let total = config
        .chapters
        .as_ref()
        .map(|ids| ids.len())
        .unwrap_or(playbook.chapters.len());
    log_bank_start_console!(playbook.title, total);

    let summary = run_bank_generation(&playbook, &config).await?;
    log_bank_complete_console!(summary.written, summary.skipped);
    Ok(())
}

fn open_store(ledger_path: Option<&str>) -> Result<CompletionStore> {
    match ledger_path {
        Some(path) => CompletionStore::open(path),
        None => CompletionStore::open_default(),
    }
}

fn require_chapter<'a>(
    playbook: &'a Playbook,
    chapter_id: &str,
) -> Result<&'a playbook_manager_sdk::Chapter> {
    playbook.chapter(chapter_id).with_context(|| {
        format!(
            "Unknown chapter id '{}' in playbook '{}'",
            chapter_id, playbook.id
        )
    })
}

fn option_letter(index: usize) -> char {
    (b'A' + index as u8) as char
}

/// Prompt until the user enters a valid option letter (or number)
fn read_choice(input: &mut impl BufRead, options: usize) -> Result<usize> {
    loop {
        print!("Your answer [A-{}]: ", option_letter(options.saturating_sub(1)));
        std::io::stdout().flush()?;

        let mut line = String::new();
        let bytes = input
            .read_line(&mut line)
            .context("Failed to read answer from stdin")?;
        if bytes == 0 {
            bail!("Input closed before the quiz was finished");
        }

        let answer = line.trim().to_lowercase();
        let choice = match answer.as_str() {
            "" => None,
            _ if answer.len() == 1 && answer.chars().all(|c| c.is_ascii_lowercase()) => {
                let index = (answer.as_bytes()[0] - b'a') as usize;
                (index < options).then_some(index)
            }
            _ => answer
                .parse::<usize>()
                .ok()
                .filter(|n| (1..=options).contains(n))
                .map(|n| n - 1),
        };

        match choice {
            Some(index) => return Ok(index),
            None => println!(
                "Please answer with a letter A-{} or a number 1-{}.",
                option_letter(options.saturating_sub(1)),
                options
            ),
        }
    }
}
