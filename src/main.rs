use clap::Parser;
use std::thread;
use std::time::Duration;
use tictactoe::{init_logging, App, Console, Language, Screen, Settings, StdConsole};

#[derive(Parser)]
#[command(author, version, about = "Two-mode console tic-tac-toe", long_about = None)]
struct Cli {
    /// Language to start in.
    #[arg(long, value_enum, default_value_t = Language::English)]
    lang: Language,

    /// Disable ANSI colors and screen clearing.
    #[arg(long)]
    no_color: bool,

    /// Skip the splash screen pause.
    #[arg(long)]
    skip_splash: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let screen = Screen::new(!cli.no_color);
    let mut console = StdConsole::new();

    if !cli.skip_splash {
        screen.clear(&mut console);
        console.print(&screen.banner());
        thread::sleep(Duration::from_millis(2500));
    }

    let settings = Settings { language: cli.lang };
    App::new(&mut console, &screen, settings).run()
}
