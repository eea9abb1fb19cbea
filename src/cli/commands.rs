//! Command dispatch

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::ToTermTree;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::FileSystem;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Top { file, top, min_len }) => cmd_top(cli, file, *top, *min_len),
        Some(Commands::Tree {
            file,
            min_len,
            check,
        }) => cmd_tree(cli, file, *min_len, *check),
        Some(Commands::Config { command }) => cmd_config(cli, command),
        Some(Commands::Completion { shell }) => {
            cmd_completion(*shell);
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, see 'wordrank --help'".to_string(),
        )),
    }
}

/// Load settings, apply flag overrides and wire the services.
fn build_container(cli: &Cli, min_len: Option<usize>) -> CliResult<ServiceContainer> {
    let mut settings = Settings::load()?;
    if let Some(min_len) = min_len {
        settings.min_word_len = min_len;
    }
    if !settings.color {
        colored::control::set_override(false);
    }
    debug!("build_container: {:?}", settings);
    Ok(ServiceContainer::new(settings, cli.quiet))
}

#[instrument(skip(cli))]
fn cmd_top(cli: &Cli, file: &Path, top: Option<i64>, min_len: Option<usize>) -> CliResult<()> {
    let container = build_container(cli, min_len)?;
    let k = top.unwrap_or(container.settings.top_k);

    let words = container.word_rank_service().top_words(file, k)?;
    if words.is_empty() {
        output::warning(&empty_ranking_message(file, k));
        return Ok(());
    }

    output::header(&format!("Top {} words in {}", words.len(), file.display()));
    output::ranked(&words);
    Ok(())
}

/// Explain an empty ranking: either nothing was asked for or nothing qualified.
fn empty_ranking_message(file: &Path, k: i64) -> String {
    if k <= 0 {
        format!("nothing to show for k = {k}")
    } else {
        format!("no qualifying words in {}", file.display())
    }
}

#[instrument(skip(cli))]
fn cmd_tree(cli: &Cli, file: &Path, min_len: Option<usize>, check: bool) -> CliResult<()> {
    let container = build_container(cli, min_len)?;
    let tree = container.word_rank_service().build_tree(file)?;

    output::info(&tree.to_term_tree());
    output::detail(&format!("{} words, height {}", tree.len(), tree.height()));

    if check {
        tree.verify().map_err(ApplicationError::from)?;
        output::success("ordering, balance and heights verified");
    }
    Ok(())
}

fn cmd_config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let container = build_container(cli, None)?;
            output::info(&container.settings.to_toml()?);
        }
        ConfigCommands::Path => {
            let path = config_path()?;
            output::info(&path.display());
        }
        ConfigCommands::Init { force } => {
            let container = build_container(cli, None)?;
            let path = config_path()?;
            init_config(container.fs.as_ref(), &path, *force)?;
            output::success(&format!("wrote {}", path.display()));
        }
    }
    Ok(())
}

fn config_path() -> CliResult<std::path::PathBuf> {
    global_config_path()
        .ok_or_else(|| CliError::Usage("cannot determine config directory".to_string()))
}

/// Write the settings template to `path`, refusing to clobber unless `force`.
pub fn init_config(fs: &dyn FileSystem, path: &Path, force: bool) -> CliResult<()> {
    if fs.exists(path) && !force {
        return Err(CliError::Usage(format!(
            "config already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        fs.create_dir_all(parent)
            .map_err(|e| InfraError::io(format!("create {}", parent.display()), e))?;
    }
    fs.write(path, &Settings::template())
        .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
    Ok(())
}

fn cmd_completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::InMemoryFileSystem;
    use rstest::rstest;

    #[test]
    fn given_no_config_when_init_then_writes_template() {
        let fs = InMemoryFileSystem::new();
        let path = Path::new("cfg/wordrank.toml");

        init_config(&fs, path, false).unwrap();

        let written = fs.content(path).expect("template written");
        assert_eq!(String::from_utf8(written).unwrap(), Settings::template());
    }

    #[test]
    fn given_existing_config_when_init_without_force_then_refuses() {
        let fs = InMemoryFileSystem::new();
        let path = Path::new("wordrank.toml");
        fs.add_file(path, b"top_k = 3\n");

        let err = init_config(&fs, path, false).unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
        assert_eq!(fs.content(path), Some(b"top_k = 3\n".to_vec()));
    }

    #[test]
    fn given_existing_config_when_init_with_force_then_overwrites() {
        let fs = InMemoryFileSystem::new();
        let path = Path::new("wordrank.toml");
        fs.add_file(path, b"top_k = 3\n");

        init_config(&fs, path, true).unwrap();
        assert_eq!(
            fs.content(path),
            Some(Settings::template().into_bytes())
        );
    }

    #[rstest]
    #[case(0, "nothing to show for k = 0")]
    #[case(-3, "nothing to show for k = -3")]
    #[case(5, "no qualifying words in a.txt")]
    fn test_empty_ranking_message(#[case] k: i64, #[case] expected: &str) {
        assert_eq!(empty_ranking_message(Path::new("a.txt"), k), expected);
    }

    #[test]
    fn given_no_command_when_executed_then_usage_error() {
        let cli = Cli {
            debug: 0,
            quiet: true,
            command: None,
        };
        let err = execute_command(&cli).unwrap_err();
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
    }
}
