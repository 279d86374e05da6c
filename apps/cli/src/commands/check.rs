//! `vigil check`

use std::path::Path;
use std::process::ExitCode;

use serde::Serialize;
use serde_json::{Map, Value};
use vigil_params::{BaseParameters, FilterParameters, RawRequest, Sort};

use crate::settings::Settings;

/// What `check` prints to stdout.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub valid: bool,
    pub errors: Vec<String>,
    pub sort: Option<&'a Sort>,
    pub fields: Option<&'a Map<String, Value>>,
}

pub struct CheckArgs<'a> {
    pub request: &'a Path,
    pub fields: Option<Vec<String>>,
    pub sort: Option<Vec<String>>,
    pub config: Option<&'a Path>,
}

pub fn run(args: CheckArgs<'_>) -> anyhow::Result<ExitCode> {
    let mut settings = Settings::load(args.config)?;
    if let Some(fields) = args.fields {
        settings.allowed.fields = fields;
    }
    if let Some(sort) = args.sort {
        settings.allowed.sort = sort;
    }

    let request: RawRequest = super::read_json(args.request)?;

    let mut base = BaseParameters::with_config(Some(&request), &settings.params);
    base.validate();
    let mut filter = FilterParameters::with_config(&request, &settings.params);
    filter.validate(&settings.allowed.fields, &settings.allowed.sort);

    let errors: Vec<String> = base
        .errors()
        .iter()
        .chain(filter.errors())
        .map(|violation| violation.code().to_owned())
        .collect();

    tracing::info!(errors = errors.len(), request = %args.request.display(), "request checked");

    let report = Report {
        valid: errors.is_empty(),
        errors,
        sort: filter.sort(),
        fields: filter.fields().map(|f| f.projection()),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(if report.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
