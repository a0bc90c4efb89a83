use std::error::Error;
use chrono::Local;

fn main() -> Result<(), Box<dyn Error>> {
	// Provide build date for the usage banner
	let build_date = Local::now().format("%Y-%m-%d").to_string();
	println!("cargo:rustc-env=BUILD_DATE={}", build_date);

	Ok(())
}
