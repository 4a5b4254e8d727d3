use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::Editor;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use mentorlink_application::{
    AuthService, ChatService, DirectoryService, MessagingService, OnboardingService,
};
use mentorlink_core::directory::SearchFilters;
use mentorlink_core::mentor::Mentor;
use mentorlink_core::session::SessionRepository;
use mentorlink_infrastructure::{
    InMemoryMentorRepository, InMemoryMessageRepository, InMemoryOnboardingRepository,
    InMemorySessionRepository, TomlProfileRepository,
};

/// Mentee id the seeded tracker and inbox data belongs to.
const DEMO_MENTEE_ID: &str = "user1";

/// Conversation id used for the assistant widget in this frontend.
const ASSISTANT_CONVERSATION_ID: &str = "cli";

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: vec![
                "/help".to_string(),
                "/mentors".to_string(),
                "/mentor".to_string(),
                "/filter".to_string(),
                "/sessions".to_string(),
                "/goals".to_string(),
                "/onboarding".to_string(),
                "/culture".to_string(),
                "/inbox".to_string(),
                "/messages".to_string(),
                "/login".to_string(),
                "/logout".to_string(),
                "/whoami".to_string(),
            ],
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// Services backing the REPL commands.
struct App {
    directory: DirectoryService,
    chat: ChatService,
    messaging: MessagingService,
    onboarding: OnboardingService,
    auth: AuthService,
    sessions: Arc<dyn SessionRepository>,
}

impl App {
    fn new() -> Result<Self> {
        Ok(Self {
            directory: DirectoryService::new(Arc::new(InMemoryMentorRepository::new())),
            chat: ChatService::new(),
            messaging: MessagingService::new(Arc::new(InMemoryMessageRepository::new())),
            onboarding: OnboardingService::new(Arc::new(InMemoryOnboardingRepository::new())),
            auth: AuthService::new(Arc::new(TomlProfileRepository::new()?)),
            sessions: Arc::new(InMemorySessionRepository::new()),
        })
    }
}

fn print_mentor_line(mentor: &Mentor) {
    println!(
        "  [{}] {} - {} @ {}",
        mentor.id.bright_cyan(),
        mentor.name.bold(),
        mentor.role,
        mentor.company
    );
    println!(
        "      ★ {:.1} ({}건 리뷰) · {}원/시간 · {}",
        mentor.rating,
        mentor.total_reviews,
        mentor.hourly_rate,
        mentor.availability.join(", ").bright_black()
    );
}

fn print_reply(content: &str, suggestions: &[String]) {
    for line in content.lines() {
        println!("{}", line.bright_blue());
    }
    if !suggestions.is_empty() {
        println!();
        for suggestion in suggestions {
            println!("  {} {}", "▸".bright_magenta(), suggestion.bright_magenta());
        }
    }
    println!();
}

fn print_help() {
    println!("{}", "Commands:".bold());
    println!("  /mentors [query]        멘토 검색");
    println!("  /mentor <id>            멘토 상세 정보");
    println!(
        "  /filter k=v ... [query] 조건 검색 (rating=4.8 price=0-80000 skill=React,Java avail=주말)"
    );
    println!("  /sessions               멘토링 세션 현황");
    println!("  /goals                  학습 목표");
    println!("  /onboarding             온보딩 체크리스트");
    println!("  /culture                회사 문화 자료");
    println!("  /inbox                  메시지함");
    println!("  /messages <id>          대화 내용 (읽음 처리)");
    println!("  /login <email>          로그인 · /logout · /whoami");
    println!("  quit                    종료");
    println!();
    println!("{}", "그 외 입력은 H-Link 어시스턴트에게 전달됩니다.".bright_black());
}

/// Parses `/filter` arguments: `key=value` tokens become filter criteria,
/// everything else is joined into the free-text query.
fn parse_filter_args(args: &str) -> (String, SearchFilters) {
    let mut filters = SearchFilters::default();
    let mut query_words: Vec<&str> = Vec::new();

    for token in args.split_whitespace() {
        match token.split_once('=') {
            Some(("rating", value)) => {
                if let Ok(rating) = value.parse::<f32>() {
                    filters.rating = rating;
                }
            }
            Some(("price", value)) => {
                if let Some((min, max)) = value.split_once('-') {
                    if let (Ok(min), Ok(max)) = (min.parse::<u32>(), max.parse::<u32>()) {
                        filters.price_range = (min, max);
                    }
                }
            }
            Some(("skill", value)) => {
                filters.expertise = value.split(',').map(str::to_string).collect();
            }
            Some(("avail", value)) => {
                filters.availability = value.split(',').map(str::to_string).collect();
            }
            _ => query_words.push(token),
        }
    }

    (query_words.join(" "), filters)
}

async fn run_command(app: &App, input: &str) -> Result<()> {
    let (command, args) = match input.split_once(' ') {
        Some((command, args)) => (command, args.trim()),
        None => (input, ""),
    };

    match command {
        "/help" => print_help(),
        "/mentors" => {
            let results = app.directory.query(args, &SearchFilters::default()).await?;
            if results.is_empty() {
                println!("{}", "검색 결과가 없습니다.".yellow());
            } else {
                for mentor in &results {
                    print_mentor_line(mentor);
                }
            }
        }
        "/filter" => {
            let (query, filters) = parse_filter_args(args);
            let results = app.directory.query(&query, &filters).await?;
            println!(
                "{}",
                format!("{}명의 멘토가 조건에 맞습니다.", results.len()).bright_black()
            );
            for mentor in &results {
                print_mentor_line(mentor);
            }
        }
        "/mentor" => match app.directory.find_mentor(args).await? {
            Some(mentor) => {
                print_mentor_line(&mentor);
                println!("      {}", mentor.bio);
                println!(
                    "      전문 분야: {}",
                    mentor.expertise.join(", ").bright_black()
                );
            }
            None => println!("{}", format!("멘토 '{}'를 찾을 수 없습니다.", args).yellow()),
        },
        "/sessions" => {
            let upcoming = app.sessions.upcoming_sessions(DEMO_MENTEE_ID).await?;
            let recent = app.sessions.recent_sessions(DEMO_MENTEE_ID, 5).await?;
            println!("{}", "예정된 세션:".bold());
            for session in &upcoming {
                println!(
                    "  {} · {} ({}분)",
                    session.scheduled_date.bright_cyan(),
                    session.topic,
                    session.duration_minutes
                );
            }
            println!("{}", "완료된 세션:".bold());
            for session in &recent {
                println!("  {} · {}", session.scheduled_date.bright_black(), session.topic);
            }
        }
        "/goals" => {
            for goal in app.sessions.goals_for_mentee(DEMO_MENTEE_ID).await? {
                println!(
                    "  {} {} ({}%)",
                    "·".bright_magenta(),
                    goal.title.bold(),
                    goal.progress
                );
            }
        }
        "/onboarding" => {
            let progress = app.onboarding.progress_for(DEMO_MENTEE_ID).await?;
            println!(
                "{}",
                format!(
                    "온보딩 진행률: {}% ({}/{})",
                    progress.overall_progress, progress.completed_tasks, progress.total_tasks
                )
                .bold()
            );
            for task in app.onboarding.checklist(DEMO_MENTEE_ID).await? {
                println!("  [{:?}] {}", task.status, task.title);
            }
        }
        "/culture" => {
            for article in app.onboarding.culture().await? {
                let marker = if article.is_required { "필수" } else { "선택" };
                println!(
                    "  [{}] {} ({}분)",
                    marker.bright_cyan(),
                    article.title,
                    article.read_time_minutes
                );
            }
        }
        "/inbox" => {
            for conversation in app.messaging.inbox().await? {
                let preview = conversation
                    .last_message
                    .as_ref()
                    .map(|m| m.content.as_str())
                    .unwrap_or("(메시지 없음)");
                println!(
                    "  [{}] {} ({}개 안읽음)",
                    conversation.id.bright_cyan(),
                    conversation.participant_names.join(", ").bold(),
                    conversation.unread_count
                );
                println!("      {}", preview.bright_black());
            }
        }
        "/messages" => {
            let log = app.messaging.messages(args).await?;
            if log.is_empty() {
                println!("{}", "대화가 없습니다.".yellow());
            } else {
                for message in &log {
                    println!("  [{}] {}", message.sender_name.bold(), message.content);
                }
                app.messaging.mark_as_read(args, DEMO_MENTEE_ID).await?;
            }
        }
        "/login" => {
            let profile = app.auth.login(args, "").await?;
            println!(
                "{}",
                format!("{}님으로 로그인했습니다.", profile.name).green()
            );
        }
        "/logout" => {
            app.auth.logout().await?;
            println!("{}", "로그아웃했습니다.".green());
        }
        "/whoami" => match app.auth.current_user().await {
            Some(profile) => println!("{} ({})", profile.name.bold(), profile.email),
            None => println!("{}", "로그인되어 있지 않습니다.".yellow()),
        },
        _ => println!("{}", "Unknown command".bright_black()),
    }

    Ok(())
}

/// The main entry point for the MentorLink REPL.
///
/// Sets up a rustyline-based REPL that:
/// 1. Initializes the in-memory repositories and services
/// 2. Hydrates the session context from the profile store
/// 3. Provides command completion for slash commands
/// 4. Routes free-text input to the H-Link assistant
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let app = App::new()?;

    // Restore the last session, if any
    if let Some(profile) = app.auth.init().await? {
        println!(
            "{}",
            format!("{}님, 다시 오신 것을 환영합니다!", profile.name).green()
        );
    }

    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== MentorLink ===".bright_magenta().bold());
    println!(
        "{}",
        "Type '/help' for commands, or just type a message to talk to H-Link. 'quit' to exit."
            .bright_black()
    );
    println!();

    // Open the assistant conversation and show the greeting
    let greeting = app.chat.open(ASSISTANT_CONVERSATION_ID).await;
    print_reply(&greeting.content, &greeting.suggestions);

    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "안녕히 가세요!".bright_green());
                    break;
                }

                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                if trimmed.starts_with('/') {
                    if let Err(e) = run_command(&app, trimmed).await {
                        eprintln!("{}", format!("Error: {}", e).red());
                    }
                    continue;
                }

                // Everything else goes to the assistant
                println!("{}", "입력 중...".bright_black());
                match app.chat.send(ASSISTANT_CONVERSATION_ID, trimmed).await {
                    Ok(Some(reply)) => print_reply(&reply.content, &reply.suggestions),
                    Ok(None) => {}
                    Err(e) => eprintln!("{}", format!("Error: {}", e).red()),
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}
