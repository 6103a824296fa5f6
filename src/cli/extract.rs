//! Render the view for a note once (also the setup shared with watch mode)

use super::args::{Args, OutputFormat};
use mdextract::render::{jump_to_item, open_item};
use mdextract::config::ConfigOverrides;
use mdextract::{Config, ExtractError, FsHost, RenderNode, Session, formatters, render};
use std::path::{Path, PathBuf};

/// Everything a view needs: configuration, host, and session state
pub(crate) struct Workspace {
    pub(crate) config: Config,
    pub(crate) host: FsHost,
    pub(crate) session: Session,
}

/// Load configuration, open the requested note, and set up the session
pub(crate) fn prepare(args: &Args) -> Result<Workspace, Box<dyn std::error::Error>> {
    let file = args.file.as_deref().map(PathBuf::from);
    if let Some(path) = &file
        && !path.is_file()
    {
        return Err(ExtractError::FileNotFound(path.display().to_string()).into());
    }

    // Config discovery and the default vault both start at the note's directory
    let start_dir = match file
        .as_deref()
        .and_then(Path::parent)
        .filter(|dir| !dir.as_os_str().is_empty())
    {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir()?,
    };

    let mut config = match &args.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => Config::discover(&start_dir).unwrap_or_default(),
    };
    config.merge(ConfigOverrides {
        mode: args.mode.map(Into::into),
        ..Default::default()
    });

    let vault = args
        .vault
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(|| start_dir.clone());
    let mut host = FsHost::with_config(vault, &config);
    if let Some(path) = &file {
        host.open(path)?;
    }

    let session = Session::from_config(&config);

    Ok(Workspace {
        config,
        host,
        session,
    })
}

/// Print a render tree in the requested output format
pub(crate) fn print_view(tree: &[RenderNode], args: &Args, config: &Config) {
    let output = match args.output_format {
        OutputFormat::Text => formatters::format_text(tree, &config.jump_icon),
        OutputFormat::Json => formatters::format_json(tree),
    };
    println!("{}", output);
}

/// Render once, then carry out `--jump` or `--open` if requested
pub(crate) fn extract_once(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let Workspace {
        config,
        mut host,
        session,
    } = prepare(args)?;

    let tree = render(&session, &mut host);

    if let Some(index) = args.jump {
        jump_to_item(&tree, index, &mut host)?;
        if let Some(request) = host.take_cursor() {
            println!("{}", request.location());
        }
        return Ok(());
    }

    if let Some(index) = args.open {
        open_item(&tree, index, &mut host)?;
        // Following a link switches documents; the mode carries over
        let tree = render(&session, &mut host);
        print_view(&tree, args, &config);
        return Ok(());
    }

    print_view(&tree, args, &config);
    Ok(())
}
