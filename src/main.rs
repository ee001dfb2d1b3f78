use clap::{Parser, Subcommand};
use colored::Colorize;
use gitlet::areas::repository::Repository;
use gitlet::artifacts::core::{PagerWriter, should_page};
use gitlet::errors::GitletError;
use minus::Pager;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "GITLET_LOG";

#[derive(Parser)]
#[command(
    name = "gitlet",
    version = "0.1.0",
    about = "A small version-control system",
    long_about = "Gitlet tracks snapshots of the files in a directory, with branches, \
    three-way merges and transfer of history between repositories on the same machine.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Create a new repository in the current directory"
    )]
    Init,
    #[command(name = "add", about = "Stage a file for the next commit")]
    Add {
        #[arg(index = 1, help = "The file to stage")]
        file: String,
    },
    #[command(
        name = "commit",
        about = "Record the staged changes",
        long_about = "This command records the staged additions and removals as a new commit \
        on the current branch."
    )]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "rm",
        about = "Unstage a file, or stage its removal and delete it if it is tracked"
    )]
    Rm {
        #[arg(index = 1, help = "The file to remove")]
        file: String,
    },
    #[command(name = "log", about = "Show the history of the current branch")]
    Log,
    #[command(name = "global-log", about = "Show every commit ever made")]
    GlobalLog,
    #[command(name = "find", about = "Print the IDs of commits with the given message")]
    Find {
        #[arg(index = 1, help = "The exact commit message")]
        message: String,
    },
    #[command(
        name = "checkout",
        about = "Switch branches or restore a file",
        long_about = "This command has three forms:\n\
        checkout -- <file>            restore <file> from the current commit\n\
        checkout <commit> -- <file>   restore <file> from <commit>\n\
        checkout <branch>             switch to <branch>"
    )]
    Checkout {
        #[arg(index = 1, help = "A branch name, or a commit ID when a file follows")]
        target: Option<String>,
        #[arg(index = 2, last = true, help = "The file to restore")]
        file: Option<String>,
    },
    #[command(name = "branch", about = "Create a branch at the current commit")]
    Branch {
        #[arg(index = 1, help = "The branch name")]
        name: String,
    },
    #[command(name = "rm-branch", about = "Delete a branch")]
    RmBranch {
        #[arg(index = 1, help = "The branch name")]
        name: String,
    },
    #[command(
        name = "reset",
        about = "Move the current branch to a commit and check it out"
    )]
    Reset {
        #[arg(index = 1, help = "The commit ID or a unique prefix of it")]
        commit: String,
    },
    #[command(name = "status", about = "Show branches, staged files and working changes")]
    Status,
    #[command(name = "merge", about = "Merge a branch into the current branch")]
    Merge {
        #[arg(index = 1, help = "The branch to merge")]
        branch: String,
    },
    #[command(name = "add-remote", about = "Register another repository as a remote")]
    AddRemote {
        #[arg(index = 1, help = "The remote name")]
        name: String,
        #[arg(index = 2, help = "Path to the remote's .gitlet directory")]
        path: String,
    },
    #[command(name = "rm-remote", about = "Forget a remote")]
    RmRemote {
        #[arg(index = 1, help = "The remote name")]
        name: String,
    },
    #[command(name = "push", about = "Fast-forward a remote branch to the current commit")]
    Push {
        #[arg(index = 1)]
        remote: String,
        #[arg(index = 2)]
        branch: String,
    },
    #[command(name = "fetch", about = "Copy a remote branch into <remote>/<branch>")]
    Fetch {
        #[arg(index = 1)]
        remote: String,
        #[arg(index = 2)]
        branch: String,
    },
    #[command(name = "pull", about = "Fetch a remote branch and merge it")]
    Pull {
        #[arg(index = 1)]
        remote: String,
        #[arg(index = 2)]
        branch: String,
    },
}

impl Commands {
    fn is_paged(&self) -> bool {
        matches!(self, Commands::Log | Commands::GlobalLog | Commands::Status)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let message = match error.downcast_ref::<GitletError>() {
                Some(gitlet_error) => gitlet_error.to_string(),
                None => format!("{error:#}"),
            };
            eprintln!("{}", message.red());
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> anyhow::Result<()> {
    let pwd = std::env::current_dir()?;

    if let Commands::Init = command {
        Repository::init(&pwd, Box::new(std::io::stdout()))?;
        return Ok(());
    }

    let pager = (command.is_paged() && should_page()).then(Pager::new);
    let writer: Box<dyn std::io::Write> = match &pager {
        Some(pager) => Box::new(PagerWriter::new(pager.clone())),
        None => Box::new(std::io::stdout()),
    };
    let mut repository = Repository::open(&pwd, writer)?;

    match command {
        Commands::Init => unreachable!("handled above"),
        Commands::Add { file } => repository.add(&file)?,
        Commands::Commit { message } => {
            repository.commit(&message)?;
        }
        Commands::Rm { file } => repository.rm(&file)?,
        Commands::Log => repository.log()?,
        Commands::GlobalLog => repository.global_log()?,
        Commands::Find { message } => repository.find(&message)?,
        Commands::Checkout { target, file } => match (target, file) {
            (None, Some(file)) => repository.checkout_file(&file)?,
            (Some(commit), Some(file)) => repository.checkout_file_from_commit(&commit, &file)?,
            (Some(branch), None) => repository.checkout_branch(&branch)?,
            (None, None) => anyhow::bail!("Incorrect operands."),
        },
        Commands::Branch { name } => repository.branch(&name)?,
        Commands::RmBranch { name } => repository.rm_branch(&name)?,
        Commands::Reset { commit } => repository.reset(&commit)?,
        Commands::Status => {
            repository.status()?;
        }
        Commands::Merge { branch } => {
            repository.merge(&branch)?;
        }
        Commands::AddRemote { name, path } => repository.add_remote(&name, &path)?,
        Commands::RmRemote { name } => repository.rm_remote(&name)?,
        Commands::Push { remote, branch } => repository.push(&remote, &branch)?,
        Commands::Fetch { remote, branch } => {
            repository.fetch(&remote, &branch)?;
        }
        Commands::Pull { remote, branch } => {
            repository.pull(&remote, &branch)?;
        }
    }

    repository.persist()?;
    drop(repository);

    if let Some(pager) = pager {
        minus::page_all(pager)?;
    }

    Ok(())
}
