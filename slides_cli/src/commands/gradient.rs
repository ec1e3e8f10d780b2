//! Gradient command: renders a gradient PNG locally, the same image the
//! set_background tool uploads.

use std::fs;
use std::path::Path;

use log::debug;

use slides_core::image::{GradientDirection, generate_gradient_from_hex};

use crate::errors::CliError;
use crate::ui;

pub fn write_gradient(start: &str, end: &str, angle: f64, output: &Path) -> Result<(), CliError> {
    if !angle.is_finite() {
        ui::error_with_details("Invalid angle", &format!("{} is not a finite number", angle));
        return Err(CliError::InputError);
    }

    let png = generate_gradient_from_hex(start, end, angle).map_err(|e| {
        ui::error_with_details("Failed to render gradient", &e.to_string());
        CliError::InputError
    })?;
    debug!("Encoded {} byte PNG", png.len());

    fs::write(output, &png).map_err(|e| {
        ui::error_with_details(
            &format!("Failed to write '{}'", output.display()),
            &e.to_string(),
        );
        CliError::FileError
    })?;

    ui::success(&format!(
        "Wrote {:?} gradient to {}",
        GradientDirection::from_angle(angle),
        output.display()
    ));
    Ok(())
}
