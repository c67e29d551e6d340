use clap::Parser;
use payment_gateway::{
    cli::{Cli, Command},
    configs, logger,
    payments::PaymentGateway,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    #[allow(clippy::expect_used)]
    let config = configs::Config::new_with_config_path(cli.config.clone())
        .expect("Failed while parsing config");

    let _guard = logger::setup(
        &config.log,
        payment_gateway::service_name!(),
        [payment_gateway::service_name!()],
    )?;

    let gateway = PaymentGateway::from_config(&config).map_err(|error| format!("{error:?}"))?;

    let outcome = match cli.command {
        Command::Authorize(args) => {
            let request = args.into_request().map_err(|error| format!("{error:?}"))?;
            gateway.authorize(request)
        }
        Command::Capture(args) => gateway.capture(args.into()),
        Command::Refund(args) => gateway.refund(args.into()),
        Command::Void(args) => gateway.void(args.into()),
        Command::Purchase(args) => {
            let request = args.into_request().map_err(|error| format!("{error:?}"))?;
            gateway.purchase(request)
        }
    }
    .map_err(|error| format!("{error:?}"))?;

    #[allow(clippy::print_stdout)]
    {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }

    Ok(())
}
