use anyhow::Result;
use clap::Parser;
use labelquote::{
    DEFAULT_QUANTITY,
    config::Settings,
    handlers::quote::{handle_quote, handle_quote_stream, render_quote},
    models::order_configuration::{
        Coating, DigitalService, LabelOptions, LabelShape, LabelSize, OrderConfiguration,
        PaperType, PrintingSecurity, SpecialProcessing,
    },
    utils::quantity::parse_quantity,
};
use std::io;
use tracing::info;

fn init_tracing() {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
}

#[derive(Parser)]
#[command(
    about = env!("CARGO_PKG_DESCRIPTION"),
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Args {
    #[arg(long, help = "(Optional) Sets the settings file path.", required = false)]
    pub config: Option<String>,

    #[arg(
        long,
        help = "Sets the number of labels ordered.",
        default_value_t = DEFAULT_QUANTITY.to_string(),
        allow_hyphen_values = true
    )]
    pub quantity: String,

    #[arg(long, help = "Sets the paper type.", default_value = "waterproof")]
    pub paper: PaperType,

    #[arg(long, help = "Sets the label size.", default_value = "standard")]
    pub size: LabelSize,

    #[arg(long, help = "Sets the label shape.", default_value = "rectangle")]
    pub shape: LabelShape,

    #[arg(long, help = "Sets the coating.", default_value = "glossy")]
    pub coating: Coating,

    #[arg(long, help = "Adds a special processing option.", required = false)]
    pub special: Vec<SpecialProcessing>,

    #[arg(long, help = "Adds a printing security option.", required = false)]
    pub security: Vec<PrintingSecurity>,

    #[arg(long, help = "Enables the digital UID service.", required = false)]
    pub digital_service: bool,

    #[arg(long, help = "Adds the digital platform fee.", required = false)]
    pub platform_fee: bool,

    #[arg(long, help = "Adds domain binding to the digital service.", required = false)]
    pub domain_binding: bool,

    #[arg(long, help = "Adds blockchain certification.", required = false)]
    pub certification: bool,

    #[arg(long, help = "(Optional) Prints the quote as JSON.", required = false)]
    pub json: bool,

    #[arg(
        long,
        help = "(Optional) Reads one JSON order per stdin line and writes one JSON quote per line.",
        required = false
    )]
    pub stream: bool,
}

impl Args {
    fn order(&self) -> OrderConfiguration {
        OrderConfiguration {
            quantity: parse_quantity(&self.quantity),
            label: LabelOptions {
                paper_type: self.paper,
                size: self.size,
                shape: self.shape,
                coating: self.coating,
            },
            special_processing: self.special.iter().copied().collect(),
            printing_security: self.security.iter().copied().collect(),
            digital_service: DigitalService {
                enabled: self.digital_service,
                platform_fee: self.platform_fee,
                domain_binding: self.domain_binding,
            },
            certification: self.certification,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let settings = Settings::load(&args.config)?;

    if args.stream {
        info!("Reading orders from stdin");
        let count = handle_quote_stream(io::stdin().lock(), io::stdout().lock(), &settings.rates)?;
        info!("Wrote {count} quotes");
        return Ok(());
    }

    let result = handle_quote(args.order(), &settings.rates);
    println!("{}", render_quote(&result, args.json || settings.output.json)?);

    Ok(())
}
