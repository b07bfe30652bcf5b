use tariff_slider::app::{self, App, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        endpoint: args.opt_value_from_str("--endpoint").unwrap(),
        config_path: args.opt_value_from_str("--config").unwrap(),
    };

    match App::from_flags(&flags) {
        Ok(state) => app::run(state),
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    }
}
