//! CLI command definitions and handlers

use anyhow::Context;
use clap::Subcommand;
use std::path::PathBuf;
use tracing::info;

use crate::core::client::DeeplClient;
use crate::core::errors::DeeplError;
use crate::core::language::Language;
use crate::core::models::Glossary;
use crate::core::options::TranslateOption;
use crate::core::tokens::{Formality, SplitSentences, TagHandling};
use crate::core::tsv::{decode_entries, encode_entries};

/// Commands for the DeepL translator
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate one or more texts
    Translate {
        /// Texts to translate, sent in a single request
        #[arg(required = true)]
        text: Vec<String>,

        /// Target language code (e.g. DE, EN-GB)
        #[arg(short, long)]
        to: String,

        /// Source language (auto-detect if not specified)
        #[arg(long)]
        from: Option<String>,

        /// Formality: default, less, more, prefer_less, prefer_more
        #[arg(long)]
        formality: Option<String>,

        /// Sentence splitting: 0, 1 or nonewlines
        #[arg(long)]
        split_sentences: Option<String>,

        /// Preserve the original formatting
        #[arg(long)]
        preserve_formatting: bool,

        /// Tag handling: default, xml or html
        #[arg(long)]
        tag_handling: Option<String>,

        /// Tags whose content is not translated
        #[arg(long, value_delimiter = ',')]
        ignore_tags: Vec<String>,

        /// Glossary to translate with
        #[arg(long)]
        glossary_id: Option<String>,

        /// Additional context for the translation
        #[arg(long)]
        context: Option<String>,

        /// Print the billed character count of each text
        #[arg(long)]
        show_billed_characters: bool,
    },

    /// List all glossaries
    Glossaries,

    /// Show glossary metadata
    Glossary {
        /// Glossary ID
        id: String,
    },

    /// Print glossary entries as TSV
    Entries {
        /// Glossary ID
        id: String,
    },

    /// Create a glossary from a TSV file
    CreateGlossary {
        /// Glossary name
        #[arg(short, long)]
        name: String,

        /// Source language
        #[arg(long)]
        from: String,

        /// Target language
        #[arg(long)]
        to: String,

        /// TSV file with one `source<TAB>target` entry per line
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Delete a glossary
    DeleteGlossary {
        /// Glossary ID
        id: String,
    },
}

/// Flags of the `translate` command, turned into request options
#[derive(Debug, Default)]
pub struct TranslateFlags {
    /// `--from`
    pub from: Option<String>,
    /// `--formality`
    pub formality: Option<String>,
    /// `--split-sentences`
    pub split_sentences: Option<String>,
    /// `--preserve-formatting`
    pub preserve_formatting: bool,
    /// `--tag-handling`
    pub tag_handling: Option<String>,
    /// `--ignore-tags`
    pub ignore_tags: Vec<String>,
    /// `--glossary-id`
    pub glossary_id: Option<String>,
    /// `--context`
    pub context: Option<String>,
    /// `--show-billed-characters`
    pub show_billed_characters: bool,
}

impl TranslateFlags {
    /// Options in flag order; unset flags add nothing
    pub fn to_options(&self) -> Vec<TranslateOption> {
        let mut options = Vec::new();

        if let Some(from) = &self.from {
            options.push(TranslateOption::SourceLang(Language::new(from.as_str())));
        }
        if let Some(formality) = &self.formality {
            options.push(TranslateOption::Formality(Formality::new(formality.as_str())));
        }
        if let Some(split) = &self.split_sentences {
            options.push(TranslateOption::SplitSentences(SplitSentences::new(split.as_str())));
        }
        if self.preserve_formatting {
            options.push(TranslateOption::PreserveFormatting(true));
        }
        if let Some(handling) = &self.tag_handling {
            options.push(TranslateOption::TagHandling(TagHandling::new(handling.as_str())));
        }
        if !self.ignore_tags.is_empty() {
            options.push(TranslateOption::ignore_tags(self.ignore_tags.iter().cloned()));
        }
        if let Some(id) = &self.glossary_id {
            options.push(TranslateOption::GlossaryId(id.clone()));
        }
        if let Some(context) = &self.context {
            options.push(TranslateOption::Context(context.clone()));
        }
        if self.show_billed_characters {
            options.push(TranslateOption::ShowBilledCharacters(true));
        }

        options
    }
}

/// Dispatch a parsed command
pub async fn run(client: &DeeplClient, command: Commands) -> anyhow::Result<()> {
    let result = match command {
        Commands::Translate {
            text,
            to,
            from,
            formality,
            split_sentences,
            preserve_formatting,
            tag_handling,
            ignore_tags,
            glossary_id,
            context,
            show_billed_characters,
        } => {
            let flags = TranslateFlags {
                from,
                formality,
                split_sentences,
                preserve_formatting,
                tag_handling,
                ignore_tags,
                glossary_id,
                context,
                show_billed_characters,
            };
            handle_translate(client, text, to, flags).await
        }
        Commands::Glossaries => handle_glossaries(client).await,
        Commands::Glossary { id } => handle_glossary(client, &id).await,
        Commands::Entries { id } => handle_entries(client, &id).await,
        Commands::CreateGlossary {
            name,
            from,
            to,
            file,
        } => handle_create_glossary(client, &name, from, to, file).await,
        Commands::DeleteGlossary { id } => handle_delete_glossary(client, &id).await,
    };

    result.map_err(explain)
}

/// Handle the translate command
pub async fn handle_translate(
    client: &DeeplClient,
    texts: Vec<String>,
    to: String,
    flags: TranslateFlags,
) -> anyhow::Result<()> {
    let target = Language::new(to);
    let options = flags.to_options();

    info!("Translating {} text(s) into {}", texts.len(), target);

    let translations = client.translate_many(texts.as_slice(), &target, &options).await?;

    for translation in translations {
        match translation.billed_characters {
            Some(billed) => println!(
                "[{}] {} ({} billed characters)",
                translation.detected_source_language, translation.text, billed
            ),
            None => println!("[{}] {}", translation.detected_source_language, translation.text),
        }
    }

    Ok(())
}

/// Handle the glossaries command
pub async fn handle_glossaries(client: &DeeplClient) -> anyhow::Result<()> {
    let glossaries = client.list_glossaries().await?;

    if glossaries.is_empty() {
        println!("No glossaries found");
    }
    for glossary in &glossaries {
        print_glossary(glossary);
    }

    Ok(())
}

/// Handle the glossary command
pub async fn handle_glossary(client: &DeeplClient, id: &str) -> anyhow::Result<()> {
    let glossary = client.get_glossary(id).await?;
    print_glossary(&glossary);
    Ok(())
}

/// Handle the entries command
pub async fn handle_entries(client: &DeeplClient, id: &str) -> anyhow::Result<()> {
    let entries = client.list_glossary_entries(id).await?;
    println!("{}", encode_entries(&entries));
    Ok(())
}

/// Handle the create-glossary command
pub async fn handle_create_glossary(
    client: &DeeplClient,
    name: &str,
    from: String,
    to: String,
    file: PathBuf,
) -> anyhow::Result<()> {
    let tsv = std::fs::read_to_string(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let entries = decode_entries(&tsv)
        .with_context(|| format!("Invalid glossary file {}", file.display()))?;

    info!("Creating glossary {:?} from {} entries", name, entries.len());

    let glossary = client
        .create_glossary(name, &Language::new(from), &Language::new(to), &entries)
        .await?;

    println!("✅ Glossary created");
    print_glossary(&glossary);
    Ok(())
}

/// Handle the delete-glossary command
pub async fn handle_delete_glossary(client: &DeeplClient, id: &str) -> anyhow::Result<()> {
    client.delete_glossary(id).await?;
    println!("✅ Glossary {} deleted", id);
    Ok(())
}

fn print_glossary(glossary: &Glossary) {
    println!(
        "{}  {}  {} -> {}  {} entries  {}  created {}",
        glossary.glossary_id,
        glossary.name,
        glossary.source_lang,
        glossary.target_lang,
        glossary.entry_count,
        if glossary.ready { "ready" } else { "not ready" },
        glossary.creation_time.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}

/// Add a hint to quota rejections so the user knows retrying won't help
fn explain(err: anyhow::Error) -> anyhow::Error {
    let quota = err
        .downcast_ref::<DeeplError>()
        .and_then(DeeplError::api_error)
        .is_some_and(|api| api.is_quota_exceeded());

    if quota {
        err.context("DeepL character quota exhausted for this billing period")
    } else {
        err
    }
}
