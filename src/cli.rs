// src/cli.rs
use std::{env, path::PathBuf};

use strum::IntoEnumIterator;

use crate::catalog::Category;
use crate::config::consts::DEFAULT_CATALOG_FILE;
use crate::config::options::{AppOptions, ExportFormat};
use crate::csv;
use crate::filter::{CATEGORY_ALL, FilterController};
use crate::store;

pub struct CliParams {
    pub options: AppOptions,
    pub catalog: Option<PathBuf>,
    pub list_categories: bool,
    pub write_out: bool,
}

impl CliParams {
    fn new() -> Self {
        Self {
            options: AppOptions::default(),
            catalog: None,
            list_categories: false,
            write_out: false,
        }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let params = parse_cli()?;

    if params.list_categories {
        println!("{}", CATEGORY_ALL);
        for c in Category::iter() {
            println!("{}", c.tag());
        }
        return Ok(());
    }

    let products = match &params.catalog {
        Some(p) => store::load_catalog(p)?,
        None => store::load_or_builtin(std::path::Path::new(DEFAULT_CATALOG_FILE)),
    };

    let mut ctl = FilterController::new(products);
    ctl.set_category(&params.options.query.category);
    ctl.set_term(&params.options.query.term);

    logf!(
        "CLI: category=\"{}\" term=\"{}\" visible={}",
        ctl.state().category,
        ctl.state().term,
        ctl.pass().visible_count()
    );

    if params.write_out {
        return export(&params, &ctl);
    }

    for p in ctl.visible() {
        println!("{}\t{}", p.title, p.price);
    }
    if ctl.pass().is_empty() {
        println!("No products found.");
    } else {
        println!("{} product(s)", ctl.pass().visible_count());
    }
    Ok(())
}

fn export(params: &CliParams, ctl: &FilterController) -> Result<(), Box<dyn std::error::Error>> {
    let export = &params.options.export;
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() { std::fs::create_dir_all(parent)?; }
    }

    let headers = Some(vec![s!("title"), s!("price"), s!("categories"), s!("search_text")]);
    let rows: Vec<Vec<String>> = ctl
        .visible()
        .iter()
        .map(|p| vec![p.title.clone(), p.price.clone(), p.categories.join(";"), p.search_text.clone()])
        .collect();

    let txt = csv::to_export_string(&headers, &rows, export.include_headers, export.format.delim());
    std::fs::write(&path, txt)?;
    println!("Wrote {} product(s) to {}", rows.len(), path.display());
    Ok(())
}

fn parse_cli() -> Result<CliParams, Box<dyn std::error::Error>> {
    let mut params = CliParams::new();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-c" | "--category" => {
                let v = args.next().ok_or("Missing value for --category")?;
                params.options.query.category = v.to_ascii_lowercase();}
            "-s" | "--search" => {
                params.options.query.term = args.next().ok_or("Missing value for --search")?;}
            "--catalog" => {
                params.catalog = Some(PathBuf::from(args.next().ok_or("Missing catalog path")?));}
            "--list-categories" => params.list_categories = true,
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.options.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "--include-headers" => params.options.export.include_headers = true,
            "-o" | "--out" => {
                params.options.export.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
                params.write_out = true;}
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(params)
}
