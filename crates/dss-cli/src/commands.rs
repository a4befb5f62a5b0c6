use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use dss_cli::author::create_author;
use dss_cli::session::{Session, parse_value};
use dss_cli::settings::{BACKEND_URL_ENV, Settings};
use dss_client::{BackendConfig, HttpBackend};
use dss_submit::{Attachment, DraftStore, Field, LookupCatalog, SubmissionGate, SubmitError};
use serde_json::json;
use tracing::info;

use crate::cli::{
    AuthorCommand, Cli, Command, ConfigCommand, DetailCommand, LookupKind, PickTarget, ShowArgs,
};
use crate::summary::{
    print_authors, print_diagnostics, print_draft, print_keywords, print_licenses,
    print_preview, print_variables,
};

/// Run one command, returning the process exit code.
pub fn run(cli: &Cli) -> Result<i32> {
    match &cli.command {
        Command::Show(args) => run_show(&cli.draft, args),
        Command::Set { path, value } => edit(&cli.draft, |store, _| {
            store.update(path, parse_value(value));
            Ok(())
        }),
        Command::Unset { path } => edit(&cli.draft, |store, _| {
            store.update(path, serde_json::Value::Null);
            Ok(())
        }),
        Command::Reset => edit(&cli.draft, |store, attachment| {
            store.reset();
            *attachment = None;
            Ok(())
        }),
        Command::Attach { file } => edit(&cli.draft, |store, attachment| {
            let loaded = Attachment::from_path(file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            match loaded.source_type() {
                Some(kind) => println!("Attached {} ({})", loaded.file_name, kind.label()),
                None => println!(
                    "Attached {} (unknown type {})",
                    loaded.file_name, loaded.media_type
                ),
            }
            store.attach_data_file(loaded);
            *attachment = Some(file.clone());
            Ok(())
        }),
        Command::Detach => edit(&cli.draft, |store, attachment| {
            store.detach();
            *attachment = None;
            Ok(())
        }),
        Command::Detail(DetailCommand::Add {
            name,
            value,
            detail_type,
        }) => edit(&cli.draft, |store, _| {
            store.add_detail(name.as_str(), value.as_str(), (*detail_type).into());
            Ok(())
        }),
        Command::Detail(DetailCommand::Remove { name }) => edit(&cli.draft, |store, _| {
            store.remove_detail(name);
            Ok(())
        }),
        Command::Lookups { kind, search } => run_lookups(&backend(cli)?, *kind, search.as_deref()),
        Command::Author(AuthorCommand::Add(args)) => {
            let author = create_author(&backend(cli)?, args)?;
            println!("Created author {} ({})", author.id, author.label());
            Ok(0)
        }
        Command::Pick { target, id } => {
            let backend = backend(cli)?;
            let catalog = LookupCatalog::load(&backend).context("failed to load lookup lists")?;
            edit(&cli.draft, |store, _| pick(store, &catalog, *target, *id))
        }
        Command::Preview => run_preview(&cli.draft, &backend(cli)?),
        Command::Submit => run_submit(&cli.draft, &backend(cli)?),
        Command::Config(command) => run_config(cli, command),
    }
}

fn settings_path(cli: &Cli) -> PathBuf {
    cli.settings.clone().unwrap_or_else(Settings::config_path)
}

fn backend_config(cli: &Cli) -> Result<BackendConfig> {
    let settings = Settings::load_from(&settings_path(cli))?;
    let env_url = std::env::var(BACKEND_URL_ENV).ok();
    Ok(settings.backend_config(env_url.as_deref(), cli.backend.as_deref()))
}

fn backend(cli: &Cli) -> Result<HttpBackend> {
    let config = backend_config(cli)?;
    info!(url = %config.base_url, "using backend");
    HttpBackend::new(config).context("failed to create HTTP client")
}

fn run_show(draft: &Path, args: &ShowArgs) -> Result<i32> {
    let (store, attachment) = Session::load(draft)?.into_store()?;
    if args.json {
        let output = serde_json::to_string_pretty(&json!({
            "draft": store.tree(),
            "diagnostics": store.diagnostics(),
            "isValid": store.is_valid(),
        }))?;
        println!("{output}");
    } else {
        print_draft(&store, attachment.as_deref());
    }
    Ok(if store.is_valid() { 0 } else { 1 })
}

/// Load the session, apply one change, save it and show the diagnostics.
fn edit<F>(draft: &Path, change: F) -> Result<i32>
where
    F: FnOnce(&mut DraftStore, &mut Option<PathBuf>) -> Result<()>,
{
    let (mut store, mut attachment) = Session::load(draft)?.into_store()?;
    change(&mut store, &mut attachment)?;
    Session::from_store(&store, attachment).save(draft)?;
    print_diagnostics(store.evaluation());
    Ok(0)
}

fn run_lookups(backend: &HttpBackend, kind: LookupKind, search: Option<&str>) -> Result<i32> {
    if search.is_some() && kind != LookupKind::Keywords {
        bail!("--search only applies to keywords");
    }
    let catalog = LookupCatalog::load(backend).context("failed to load lookup lists")?;
    match kind {
        LookupKind::Authors => print_authors(&catalog.co_author_candidates(None)),
        LookupKind::Licenses => print_licenses(catalog.licenses()),
        LookupKind::Variables => print_variables(catalog.variables()),
        LookupKind::Keywords => print_keywords(&catalog.search_keywords(search.unwrap_or(""))),
    }
    Ok(0)
}

fn pick(store: &mut DraftStore, catalog: &LookupCatalog, target: PickTarget, id: i64) -> Result<()> {
    match target {
        PickTarget::FirstAuthor => {
            let author = catalog
                .find_author(id)
                .with_context(|| format!("no author with id {id}"))?;
            store.set(Field::FirstAuthor, json!(author));
        }
        PickTarget::CoAuthor => {
            let first_author = store.draft().first_author.clone();
            let candidates = catalog.co_author_candidates(first_author.as_ref());
            let Some(author) = candidates.into_iter().find(|a| a.id == id) else {
                if catalog.find_author(id).is_some() {
                    bail!("author {id} is already the first author");
                }
                bail!("no author with id {id}");
            };
            let mut co_authors = store.draft().co_authors.clone();
            co_authors.push(author.clone());
            store.set_co_authors(&co_authors);
        }
        PickTarget::License => {
            let license = catalog
                .find_license(id)
                .with_context(|| format!("no license with id {id}"))?;
            store.set(Field::License, json!(license));
        }
        PickTarget::Variable => {
            let variable = catalog
                .find_variable(id)
                .with_context(|| format!("no variable with id {id}"))?;
            store.set(Field::Variable, json!(variable));
        }
        PickTarget::Keyword => {
            let keyword = catalog
                .find_keyword(id)
                .with_context(|| format!("no keyword with id {id}"))?;
            store.add_keyword(keyword);
        }
    }
    Ok(())
}

fn run_preview(draft: &Path, backend: &HttpBackend) -> Result<i32> {
    let (store, _) = Session::load(draft)?.into_store()?;
    let Some(attachment) = store.attachment() else {
        bail!("no file attached; use `dss attach <FILE>` first");
    };
    let preview = backend
        .preview(attachment)
        .with_context(|| format!("failed to preview {}", attachment.file_name))?;
    print_preview(&attachment.file_name, &preview);

    let mut referenced: Vec<&str> = Vec::new();
    if let Some(source) = &store.draft().data_source {
        referenced.extend(source.variable_names.iter().map(String::as_str));
        if let Some(spatial) = &source.spatial_scale {
            referenced.extend(spatial.dimension_names.iter().map(String::as_str));
        }
        if let Some(temporal) = &source.temporal_scale {
            referenced.extend(temporal.dimension_names.iter().map(String::as_str));
        }
    }
    let missing = preview.missing_columns(referenced);
    if !missing.is_empty() {
        println!("Not found in the file: {}", missing.join(", "));
    }
    Ok(0)
}

fn run_submit(draft: &Path, backend: &HttpBackend) -> Result<i32> {
    let (mut store, attachment) = Session::load(draft)?.into_store()?;
    match SubmissionGate::new().submit(&mut store, backend) {
        Ok(receipt) => {
            Session::from_store(&store, None).save(draft)?;
            println!("Upload successful: {}", receipt.message);
            Ok(0)
        }
        Err(error) => {
            if matches!(error, SubmitError::InvalidMetadata { .. }) {
                print_diagnostics(store.evaluation());
            }
            // The draft is unchanged on failure; keep the session as it was.
            Session::from_store(&store, attachment).save(draft)?;
            Err(error.into())
        }
    }
}

fn run_config(cli: &Cli, command: &ConfigCommand) -> Result<i32> {
    let path = settings_path(cli);
    match command {
        ConfigCommand::Show => {
            let settings = Settings::load_from(&path)?;
            let effective = backend_config(cli)?;
            println!("Settings file: {}", path.display());
            println!("Configured backend: {}", settings.backend.url);
            println!("Effective backend: {}", effective.base_url);
            println!("Timeout: {}s", effective.timeout_secs);
        }
        ConfigCommand::SetBackend { url } => {
            let mut settings = Settings::load_from(&path)?;
            settings.backend.url = url.trim().to_string();
            settings.save_to(&path)?;
            println!("Backend set to {} in {}", settings.backend.url, path.display());
        }
    }
    Ok(0)
}
