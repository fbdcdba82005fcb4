use std::io;

use anyhow::Result;
use polars::prelude::DataFrame;

use datapick_cli::pipeline::{LoadOptions, list_candidates, load_dataset};

use crate::cli::{ListArgs, LoadArgs};

pub fn run_load(args: &LoadArgs) -> Option<DataFrame> {
    let options = LoadOptions {
        dir: args.dir.clone(),
        select: args.select,
        head_rows: args.head,
        json: args.json,
    };
    let stdin = io::stdin();
    let mut input = stdin.lock();
    load_dataset(&options, &mut input)
}

pub fn run_list(args: &ListArgs) -> Result<bool> {
    list_candidates(&args.dir, args.json)
}
