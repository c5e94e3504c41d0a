use anyhow::Result;
use clap::Parser;
use derive_more::Display;
use gosub_config::config_set;
use gosub_config::storage::JsonStorageAdapter;
use gosub_treeview_bin::prelude::*;
use gosub_treeview_bin::sample::sample_records;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::fs;

#[derive(Debug, Parser)]
#[clap(name = "treeview", version = "0.1.0", author = "Gosub")]
#[clap(about = "Renders parent/child records as an expandable tree")]
struct Cli {
    /// Json file with records ({"itemId", "itemName", "itemParentId"}). Uses the sample when omitted.
    #[clap(short = 'i', long = "input")]
    input: Option<String>,

    /// Json settings file with treeview.* settings
    #[clap(short = 'c', long = "config")]
    config: Option<String>,

    /// Click the expand control of the node with this id (can be repeated)
    #[clap(short = 't', long = "toggle")]
    toggle: Vec<i64>,

    /// Fail when records cannot all be placed in the tree
    #[clap(long = "strict")]
    strict: bool,

    /// Print records that could not be placed in the tree
    #[clap(short = 'r', long = "report")]
    report: bool,

    #[clap(short = 'o', long = "output", default_value = "html")]
    output: Output,

    /// Log more (-v debug, -vv trace)
    #[clap(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, Display, clap::ValueEnum)]
enum Output {
    #[display("html")]
    Html,
    #[display("outline")]
    Outline,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    SimpleLogger::new().with_level(level).init()?;

    if let Some(path) = &args.config {
        config_store_write().set_storage(Box::new(JsonStorageAdapter::try_from(path.as_str())?));
    }
    if args.strict {
        config_set!(bool "treeview.hierarchy.strict", true);
    }

    let records = match &args.input {
        Some(path) => load_records(&fs::read_to_string(path)?)?,
        None => sample_records(),
    };

    let config = TreeViewConfig::from_store(&config_store());
    let tree = Tree::with_config(records, config);

    let document = DocumentBuilderImpl::new_document();
    let body = document.get().body();
    let view = tree.mount(&document, body)?;

    for id in &args.toggle {
        view.toggle(*id)?;
    }

    if args.report {
        print_report(view.report());
    }

    match args.output {
        Output::Html => println!("{}", view.write()),
        Output::Outline => {
            for node in view.roots() {
                print_outline(node, 0);
            }
        }
    }

    Ok(())
}

fn print_report(report: &BuildReport) {
    if report.is_clean() {
        eprintln!("all records placed");
        return;
    }

    for (label, records) in [
        ("orphan", &report.orphans),
        ("cycle", &report.cycles),
        ("duplicate", &report.duplicates),
    ] {
        for record in records {
            eprintln!("{label:10}: {} {} (parent {})", record.id, record.name, record.parent_id);
        }
    }
}

fn print_outline(node: &TreeNode<DocumentImpl>, depth: usize) {
    let marker = match (node.has_children(), node.is_collapsed()) {
        (false, _) => " ",
        (true, true) => "+",
        (true, false) => "\u{2212}",
    };
    println!("{}{marker} {} [{}]", "  ".repeat(depth), node.name(), node.id());

    if node.has_children() && !node.is_collapsed() {
        for child in node.children() {
            print_outline(child, depth + 1);
        }
    }
}
