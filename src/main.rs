use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use slimmark::Options;

const FEATURES: &str = "backslash-transforms, blockquotes, code, document-tags, em, headings, \
                        horizontal-rules, hyphen-transforms, images, links, lists, mark, \
                        paragraphs, strong";

#[derive(Debug, Parser)]
#[command(version, about = "Compile a constrained Markdown dialect to HTML")]
struct Cli {
    /// Input files; reads stdin when none are given
    files: Vec<PathBuf>,

    /// Pass text through without HTML entity escaping
    #[arg(long)]
    allow_html: bool,

    /// Remove tag pairs that render no text
    #[arg(long)]
    clean_empty_tags: bool,

    /// Turn on a feature that is off by default
    #[arg(long, value_name = "FEATURE", value_delimiter = ',', help = FEATURES)]
    enable: Vec<String>,

    /// Turn off a feature that is on by default
    #[arg(long, value_name = "FEATURE", value_delimiter = ',')]
    disable: Vec<String>,

    /// Clamp space runs to this many characters
    #[arg(long, value_name = "N", default_value_t = 0)]
    max_consecutive_spaces: usize,

    /// Clamp tab runs to this many characters
    #[arg(long, value_name = "N", default_value_t = 0)]
    max_consecutive_tabs: usize,

    /// Convert each run of N spaces into one tab
    #[arg(long, value_name = "N", default_value_t = 0)]
    spaces_to_tab: usize,

    /// Convert each tab into N spaces
    #[arg(long, value_name = "N", default_value_t = 0)]
    tab_to_spaces: usize,

    /// Print the resolved token sequence to stdout
    #[arg(long)]
    debug_tokens: bool,
}

fn feature_flag<'o>(options: &'o mut Options, name: &str) -> Option<&'o mut bool> {
    Some(match name {
        "backslash-transforms" => &mut options.enable_backslash_transforms,
        "blockquotes" => &mut options.enable_blockquotes,
        "code" => &mut options.enable_code_tags,
        "document-tags" => &mut options.enable_document_tags,
        "em" => &mut options.enable_em_tags,
        "headings" => &mut options.enable_headings,
        "horizontal-rules" => &mut options.enable_horizontal_rules,
        "hyphen-transforms" => &mut options.enable_hyphen_transforms,
        "images" => &mut options.enable_images,
        "links" => &mut options.enable_links,
        "lists" => &mut options.enable_lists,
        "mark" => &mut options.enable_mark_tags,
        "paragraphs" => &mut options.enable_paragraphs,
        "strong" => &mut options.enable_strong_tags,
        _ => return None,
    })
}

fn build_options(cli: &Cli) -> Options {
    let mut options = Options {
        allow_html: cli.allow_html,
        clean_empty_tags: cli.clean_empty_tags,
        debug_print_tokens: cli.debug_tokens,
        max_consecutive_spaces: cli.max_consecutive_spaces,
        max_consecutive_tabs: cli.max_consecutive_tabs,
        spaces_to_tab: cli.spaces_to_tab,
        tab_to_spaces: cli.tab_to_spaces,
        ..Options::default()
    };

    for (list, value) in [(&cli.enable, true), (&cli.disable, false)] {
        for name in list {
            match feature_flag(&mut options, name) {
                Some(flag) => *flag = value,
                None => {
                    eprintln!("unknown feature {:?}; one of: {}", name, FEATURES);
                    process::exit(2);
                }
            }
        }
    }

    options
}

fn main() {
    let cli = Cli::parse();
    let options = build_options(&cli);

    let mut inputs: Vec<(String, Vec<u8>)> = Vec::new();
    if cli.files.is_empty() {
        let mut buf = Vec::new();
        if let Err(e) = std::io::stdin().read_to_end(&mut buf) {
            eprintln!("stdin: {}", e);
            process::exit(1);
        }
        inputs.push(("<stdin>".into(), buf));
    } else {
        for path in &cli.files {
            match fs::read(path) {
                Ok(buf) => inputs.push((path.display().to_string(), buf)),
                Err(e) => {
                    eprintln!("{}: {}", path.display(), e);
                    process::exit(1);
                }
            }
        }
    }

    for (name, input) in inputs {
        match slimmark::compile(&input, &options) {
            Ok(html) => println!("{}", html),
            Err(e) => {
                eprintln!("{}: {}", name, e);
                process::exit(1);
            }
        }
    }
}
