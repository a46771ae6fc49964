use anyhow::{Context, Result};
use chrono::{Duration, Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use family_helper::display::{booking_notice, profile_summary, studio_card};
use family_helper::{
    llm, Config, FamilyForm, FileProfileStore, KidEntry, MealPlanner, MemberEntry, MenuPromptBuilder,
    MenuRequest, ProfileStore, StaticStudioDirectory, StudioDirectory, StudioQuery,
};

/// Family Helper - meal prep and photoshoot booking assistant
#[derive(Parser)]
#[command(name = "family-helper", version, about)]
struct Cli {
    /// Path to a JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Manage saved family preferences
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Generate a weekly menu
    Menu(MenuArgs),

    /// Find photoshoot studios
    Studios(StudioArgs),
}

#[derive(Subcommand)]
enum ProfileCommand {
    /// Show the saved family preferences
    Show,
    /// Save family preferences, replacing any saved ones
    Save(FamilyArgs),
    /// Delete the saved family preferences
    Clear,
}

#[derive(Args)]
struct FamilyArgs {
    /// Number of adults (1-6)
    #[arg(long, default_value_t = 2)]
    adults: u32,

    /// Number of kids (0-8)
    #[arg(long, default_value_t = 2)]
    kids: u32,

    /// Adult details as "Name:preferences" (repeatable)
    #[arg(long = "adult", value_parser = parse_adult)]
    adult_entries: Vec<MemberEntry>,

    /// Kid details as "Name:Age group:preferences" (repeatable)
    #[arg(long = "kid", value_parser = parse_kid)]
    kid_entries: Vec<KidEntry>,

    /// Family dietary restrictions, e.g. "vegetarian, gluten-free"
    #[arg(long)]
    diet: Option<String>,
}

impl FamilyArgs {
    fn into_form(self) -> FamilyForm {
        FamilyForm {
            adult_count: self.adults,
            kid_count: self.kids,
            adults: self.adult_entries,
            kids: self.kid_entries,
            dietary_restrictions: self.diet.unwrap_or_default(),
        }
    }
}

#[derive(Args)]
struct MenuArgs {
    /// Ignore saved preferences and describe the family with the flags below
    #[arg(long)]
    manual: bool,

    /// Number of adults (1-6)
    #[arg(long, requires = "manual")]
    adults: Option<u32>,

    /// Number of kids (0-8)
    #[arg(long, requires = "manual")]
    kids: Option<u32>,

    /// Adult details as "Name:preferences" (repeatable)
    #[arg(long = "adult", value_parser = parse_adult, requires = "manual")]
    adult_entries: Vec<MemberEntry>,

    /// Kid details as "Name:Age group:preferences" (repeatable)
    #[arg(long = "kid", value_parser = parse_kid, requires = "manual")]
    kid_entries: Vec<KidEntry>,

    /// Dietary restrictions for this menu, replacing any saved ones
    #[arg(long)]
    diet: Option<String>,

    /// Leftover ingredients to use up
    #[arg(long)]
    leftovers: Option<String>,

    /// Print the prompt instead of calling the completion service
    #[arg(long)]
    dry_run: bool,
}

impl MenuArgs {
    fn into_form(self) -> FamilyForm {
        let defaults = FamilyForm::default();
        FamilyForm {
            adult_count: self.adults.unwrap_or(defaults.adult_count),
            kid_count: self.kids.unwrap_or(defaults.kid_count),
            adults: self.adult_entries,
            kids: self.kid_entries,
            dietary_restrictions: self.diet.unwrap_or_default(),
        }
    }
}

#[derive(Args)]
struct StudioArgs {
    #[arg(long, default_value = "San Francisco, CA")]
    location: String,

    /// Desired date (YYYY-MM-DD), defaults to tomorrow
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Number of family members in the photoshoot (1-10)
    #[arg(long, default_value_t = 4)]
    size: u32,

    /// Book the studio with this name
    #[arg(long)]
    book: Option<String>,
}

fn parse_adult(raw: &str) -> Result<MemberEntry, String> {
    let mut parts = raw.splitn(2, ':');
    Ok(MemberEntry {
        name: parts.next().unwrap_or_default().to_string(),
        preferences: parts.next().unwrap_or_default().to_string(),
    })
}

fn parse_kid(raw: &str) -> Result<KidEntry, String> {
    let parts: Vec<&str> = raw.splitn(3, ':').collect();
    match parts.as_slice() {
        [name, age_group, preferences] => Ok(KidEntry {
            name: name.to_string(),
            age_group: age_group.to_string(),
            preferences: preferences.to_string(),
        }),
        [name, age_group] => Ok(KidEntry {
            name: name.to_string(),
            age_group: age_group.to_string(),
            preferences: String::new(),
        }),
        _ => Err(format!(
            "expected \"Name:Age group[:preferences]\", got \"{}\"",
            raw
        )),
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    let store = FileProfileStore::new(&config.storage.profile_path);

    match cli.command {
        Command::Profile { action } => run_profile(action, &store),
        Command::Menu(args) => run_menu(args, &config, &store).await,
        Command::Studios(args) => run_studios(args),
    }
}

fn run_profile(action: ProfileCommand, store: &FileProfileStore) -> Result<()> {
    match action {
        ProfileCommand::Show => match store.load()? {
            Some(profile) => {
                for line in profile_summary(&profile) {
                    println!("{}", line);
                }
            }
            None => println!("No saved family preferences"),
        },
        ProfileCommand::Save(args) => {
            let profile = args.into_form().into_profile()?;
            store.save(&profile)?;
            println!("Family preferences saved!");
        }
        ProfileCommand::Clear => {
            store.clear()?;
            println!("Saved family preferences removed");
        }
    }
    Ok(())
}

async fn run_menu(args: MenuArgs, config: &Config, store: &FileProfileStore) -> Result<()> {
    let leftovers = args.leftovers.clone().unwrap_or_default();
    let dry_run = args.dry_run;
    let saved = if args.manual { None } else { store.load()? };

    let request = match saved {
        Some(profile) => {
            for line in profile_summary(&profile) {
                println!("{}", line);
            }
            let request = MenuRequest::from_profile(&profile, leftovers);
            match args.diet {
                Some(diet) => request.with_dietary_restrictions(diet),
                None => request,
            }
        }
        None => {
            if !args.manual {
                log::info!("No saved family preferences, using the default family (pass --manual to describe yours)");
            }
            let profile = args.into_form().into_profile()?;
            println!("Total family size: {}", profile.family_size());
            MenuRequest::from_profile(&profile, leftovers)
        }
    };

    if dry_run {
        MealPlanner::validate(&request)?;
        print!("{}", MenuPromptBuilder::new().build_menu_prompt(&request));
        return Ok(());
    }

    let client = llm::create_client(&config.llm).context("Failed to set up completion client")?;
    let planner = MealPlanner::new(client);
    let menu = planner.generate_menu(&request).await?;

    println!();
    println!("Your Weekly Menu");
    println!("{}", menu);
    Ok(())
}

fn run_studios(args: StudioArgs) -> Result<()> {
    let today = Local::now().date_naive();
    let book = args.book;
    let query = StudioQuery {
        location: args.location,
        date: args.date.unwrap_or(today + Duration::days(1)),
        party_size: args.size,
    };
    query.validate(today)?;

    let listings = StaticStudioDirectory.search(&query);
    println!("Available Photoshoot Studios");
    for listing in &listings {
        for line in studio_card(listing) {
            println!("{}", line);
        }
        println!("---");
    }

    if let Some(name) = book {
        let listing = listings
            .iter()
            .find(|l| l.name.eq_ignore_ascii_case(name.trim()))
            .with_context(|| format!("No studio named '{}'", name))?;
        anyhow::ensure!(listing.available, "{} is not available", listing.name);
        for line in booking_notice(listing) {
            println!("{}", line);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_adult() {
        let entry = parse_adult("Sam:no mushrooms").unwrap();
        assert_eq!(entry.name, "Sam");
        assert_eq!(entry.preferences, "no mushrooms");

        let bare = parse_adult("Sam").unwrap();
        assert_eq!(bare.preferences, "");
    }

    #[test]
    fn test_parse_kid() {
        let kid = parse_kid("Ivy:Child (5-12):pasta").unwrap();
        assert_eq!(kid.age_group, "Child (5-12)");
        assert_eq!(kid.preferences, "pasta");

        assert!(parse_kid("Ivy").is_err());
    }

    #[test]
    fn test_cli_parses_menu_flags() {
        let cli = Cli::try_parse_from([
            "family-helper",
            "menu",
            "--manual",
            "--adults",
            "1",
            "--kids",
            "0",
            "--adult",
            "Jo:tea",
            "--leftovers",
            "rice",
        ])
        .unwrap();
        match cli.command {
            Command::Menu(args) => {
                assert!(args.manual);
                assert_eq!(args.adults, Some(1));
                assert_eq!(args.adult_entries.len(), 1);
                assert_eq!(args.leftovers.as_deref(), Some("rice"));
            }
            _ => panic!("expected menu command"),
        }
    }

    #[test]
    fn test_family_flags_require_manual() {
        let cases: [&[&str]; 4] = [
            &["family-helper", "menu", "--adults", "5"],
            &["family-helper", "menu", "--kids", "3"],
            &["family-helper", "menu", "--adult", "Zed:no eggs"],
            &["family-helper", "menu", "--kid", "Ivy:Child (5-12)"],
        ];
        for argv in cases {
            match Cli::try_parse_from(argv) {
                Err(e) => assert_eq!(e.kind(), clap::error::ErrorKind::MissingRequiredArgument),
                Ok(_) => panic!("{:?} should require --manual", argv),
            }
        }
    }

    #[test]
    fn test_saved_profile_menu_accepts_session_flags() {
        let cli = Cli::try_parse_from([
            "family-helper",
            "menu",
            "--diet",
            "vegan",
            "--leftovers",
            "beans",
        ])
        .unwrap();
        match cli.command {
            Command::Menu(args) => {
                assert!(!args.manual);
                assert_eq!(args.diet.as_deref(), Some("vegan"));
            }
            _ => panic!("expected menu command"),
        }
    }

    #[test]
    fn test_manual_form_defaults() {
        let cli = Cli::try_parse_from(["family-helper", "menu", "--manual", "--kids", "0"]).unwrap();
        match cli.command {
            Command::Menu(args) => {
                let form = args.into_form();
                assert_eq!(form.adult_count, FamilyForm::default().adult_count);
                assert_eq!(form.kid_count, 0);
            }
            _ => panic!("expected menu command"),
        }
    }

    #[test]
    fn test_studios_book_flag() {
        let cli = Cli::try_parse_from([
            "family-helper",
            "studios",
            "--book",
            "Family Moments by Shoott",
        ])
        .unwrap();
        match cli.command {
            Command::Studios(args) => {
                assert_eq!(args.book.as_deref(), Some("Family Moments by Shoott"))
            }
            _ => panic!("expected studios command"),
        }
    }
}
