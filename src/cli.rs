use {
    crate::common::{debug_println, DEBUG},
    clap::{Parser, ValueEnum},
    primality::Verdict,
    std::sync::atomic::Ordering,
};

#[derive(Debug, Parser)]
pub struct Cli {
    /// Number to classify
    #[arg(allow_negative_numbers = true, default_value_t = 17)]
    number: i64,

    /// Language of the printed verdict
    #[arg(long, default_value = "pt")]
    lang: Lang,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Lang {
    Pt,
    En,
}

impl Lang {
    fn message(self, verdict: Verdict) -> &'static str {
        match (self, verdict) {
            (Lang::Pt, Verdict::Prime) => "É primo!",
            (Lang::Pt, Verdict::Composite) => "Não é primo!",
            (Lang::En, Verdict::Prime) => "Prime.",
            (Lang::En, Verdict::Composite) => "Composite.",
        }
    }
}

pub(crate) fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    DEBUG.store(cli.debug, Ordering::Relaxed);
    let verdict = Verdict::of(cli.number);
    debug_println!("{} -> {verdict:?}", cli.number);
    println!("{}", cli.lang.message(verdict));
    Ok(())
}
