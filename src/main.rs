fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    let presenter = mandelbrot_text::PlainTextPresenter::new();
    let mut controller = mandelbrot_text::DemoController::new(presenter, rand::rng());

    let stdout = std::io::stdout();
    controller.run(&mut stdout.lock())?;

    Ok(())
}
