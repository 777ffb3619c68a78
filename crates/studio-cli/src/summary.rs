use console::Style;
use studio_core::consts::{DEFAULT_JPEG_QUALITY, HISTORY_CAPACITY};
use studio_core::script::config::EditScript;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    step: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            step: Style::new().green(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_script_summary(script: &EditScript) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Image Studio"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(12)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(script.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(script.output.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("History"),
        s.value
            .apply_to(script.history_capacity.unwrap_or(HISTORY_CAPACITY))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("JPEG quality"),
        s.value
            .apply_to(script.jpeg_quality.unwrap_or(DEFAULT_JPEG_QUALITY))
    );
    println!();

    println!("  {}", s.header.apply_to("Steps"));
    for (i, step) in script.steps.iter().enumerate() {
        println!("    {:>3}  {}", s.label.apply_to(i + 1), s.step.apply_to(step));
    }
    println!();
}
