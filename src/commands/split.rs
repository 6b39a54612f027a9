use crate::config::{ConfigFile, SplitConfig};
use crate::split_points::parse_split_list;
use crate::splitter::{self, SplitOutcome};
use anyhow::Result;
use std::path::PathBuf;

pub struct SplitArgs {
    pub path: Option<PathBuf>,
    pub pages: Option<String>,
    pub offset: Option<i64>,
    pub output_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub dry_run: bool,
}

impl SplitArgs {
    fn into_config(self) -> Result<SplitConfig> {
        let file = match &self.config {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };

        let overrides = ConfigFile {
            input_pdf: self.path,
            split_pages: self.pages.as_deref().map(parse_split_list).transpose()?,
            num_prefix_pages: self.offset,
            output_folder: self.output_dir,
        };

        file.resolve(overrides)
    }
}

pub fn run(args: SplitArgs) -> Result<()> {
    let dry_run = args.dry_run;
    let config = args.into_config()?;

    let outcome = if dry_run {
        splitter::plan(&config)?
    } else {
        splitter::split(&config)?
    };

    match outcome {
        SplitOutcome::Success {
            total_pages,
            chunks,
        } => {
            println!(
                "Split {} pages into {} chunk(s) in {}",
                total_pages,
                chunks.len(),
                config.output_folder.display()
            );
        }
        SplitOutcome::Planned {
            total_pages,
            chunks,
        } => {
            println!("{} pages, {} chunk(s):", total_pages, chunks.len());
            for chunk in chunks {
                println!(
                    "  pages {}-{} ({}) -> {}",
                    chunk.first_page,
                    chunk.last_page,
                    chunk.page_count,
                    chunk.path.display()
                );
            }
        }
        SplitOutcome::NoOp { reason } => {
            println!("Nothing to do: {}", reason);
        }
    }

    Ok(())
}
