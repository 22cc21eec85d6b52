use {
    anyhow::{Context, Result},
    base::*,
    math::{float_from_half, half_from_float},
};

fn convert(arg: &str) -> Result<String> {
    if let Some(hex) = arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
        let bits = u16::from_str_radix(hex, 16)
            .with_context(|| format!("{arg} is not a 16-bit hex pattern"))?;
        Ok(format!("0x{:04x} -> {:e}", bits, float_from_half(bits)))
    } else {
        let value: f32 = arg
            .parse()
            .with_context(|| format!("{arg} is not a number"))?;
        let bits = half_from_float(value);
        Ok(format!(
            "{:e} -> 0x{:04x} ({:e})",
            value,
            bits,
            float_from_half(bits)
        ))
    }
}

fn main() -> Result<()> {
    init_stdout_logger();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        log_fatal!("Usage: {} <float | 0xHALF>...", args[0]);
    }

    for arg in &args[1..] {
        match convert(arg) {
            Ok(line) => println!("{}", line),
            Err(error) => log_fatal!("{:#}", error),
        }
    }
    log_debug!("converted {} values", args.len() - 1);

    Ok(())
}
