// src/cli.rs
//
// Usage:
//   cli --product "Relógio" --keywords "frete grátis" --url
//   GEMINI_API_KEY=... cli --product TV --gateway Cielo --domain .br --enhance
use color_eyre::eyre::{Result, bail, eyre};

use crate::{
    config::options::AppOptions,
    core::{assemble, search_url},
    enhance::{self, CancelToken},
    estimator::Estimator,
    form::{FormEvent, FormState},
    optimizer::GeminiOptimizer,
    progress::{Progress, Stage},
};

const HELP: &str = "\
Usage: cli [options]

  --product NAME          product name (quoted in the dork)
  --gateway NAME          payment gateway; repeatable, replaces the defaults
  --custom-gateway NAME   extra gateway appended after the selected ones
  --domain SUFFIX         domain suffix such as .br; repeatable, replaces the defaults
  --keywords TEXT         free keywords appended verbatim
  --no-defaults           start with no gateways and no domains selected
  --enhance               reword via Gemini (GEMINI_API_KEY), then run the simulated analysis
  --url                   also print the search URL
  -h, --help              show this help";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub product: Option<String>,
    pub gateways: Vec<String>,
    pub custom_gateway: Option<String>,
    pub domains: Vec<String>,
    pub keywords: Option<String>,
    pub no_defaults: bool,
    pub enhance: bool,
    pub url: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Run(CliArgs),
}

pub fn parse<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut out = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        let mut value = |flag: &str| args.next().ok_or_else(|| eyre!("Missing value for {flag}"));
        match a.as_str() {
            "--product" => out.product = Some(value("--product")?),
            "--gateway" => out.gateways.push(value("--gateway")?),
            "--custom-gateway" => out.custom_gateway = Some(value("--custom-gateway")?),
            "--domain" => out.domains.push(value("--domain")?),
            "--keywords" => out.keywords = Some(value("--keywords")?),
            "--no-defaults" => out.no_defaults = true,
            "--enhance" => out.enhance = true,
            "--url" => out.url = true,
            "-h" | "--help" => return Ok(Command::Help),
            _ => bail!("Unknown arg: {a}"),
        }
    }
    Ok(Command::Run(out))
}

impl CliArgs {
    /// Replay the flags as form events, the same way the GUI would.
    pub fn to_form(&self) -> FormState {
        let mut form = if self.no_defaults { FormState::empty() } else { FormState::default() };

        if !self.gateways.is_empty() {
            form.selected_gateways.clear();
        }
        if !self.domains.is_empty() {
            form.domain_suffixes.clear();
        }

        let mut events = Vec::new();
        if let Some(p) = &self.product {
            events.push(FormEvent::SetProductName(p.clone()));
        }
        for g in &self.gateways {
            events.push(FormEvent::ToggleGateway { name: g.clone(), on: true });
        }
        if let Some(c) = &self.custom_gateway {
            events.push(FormEvent::SetCustomGateway(c.clone()));
        }
        for d in &self.domains {
            events.push(FormEvent::ToggleDomain { suffix: d.clone(), on: true });
        }
        if let Some(k) = &self.keywords {
            events.push(FormEvent::SetKeywords(k.clone()));
        }

        events.into_iter().fold(form, |f, ev| f.apply(ev))
    }
}

struct StderrProgress;

impl Progress for StderrProgress {
    fn stage(&mut self, stage: Stage) {
        eprintln!("{}", stage.label());
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
}

pub fn run<I>(args: I) -> Result<()>
where
    I: IntoIterator<Item = String>,
{
    let args = match parse(args)? {
        Command::Help => {
            eprintln!("{HELP}");
            return Ok(());
        }
        Command::Run(a) => a,
    };

    let dork = assemble(&args.to_form());
    println!("{dork}");

    if args.url {
        println!("{}", search_url(&dork));
    }

    if args.enhance {
        let options = AppOptions::from_env()?;
        let optimizer = GeminiOptimizer::new(options.optimizer);
        let estimator = Estimator::new(&options.estimator);

        let outcome = enhance::run(&optimizer, &estimator, &dork, &CancelToken::new(), &mut StderrProgress)
            .ok_or_else(|| eyre!("Enhance was cancelled"))?;

        println!("{}", outcome.dork);
        if args.url && outcome.dork != dork {
            println!("{}", search_url(&outcome.dork));
        }
        println!("Estimated Results: {}", outcome.analysis.estimated_results_label);
        for s in &outcome.analysis.suggestions {
            println!("- {s}");
        }
    }

    Ok(())
}
