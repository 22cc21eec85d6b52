use {
    anyhow::{Context, Result},
    base::*,
    math::{hash, hash32, hash64},
};

enum Width {
    Native,
    X86,
    X64,
}

fn main() -> Result<()> {
    init_stdout_logger();

    let args: Vec<String> = std::env::args().collect();
    let mut width = Width::Native;
    let mut values = Vec::new();
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--x86" => width = Width::X86,
            "--x64" => width = Width::X64,
            _ => {
                let value: i64 = arg
                    .parse()
                    .with_context(|| format!("{arg} is not an integer"))?;
                values.push(value);
            }
        }
    }

    let result = match width {
        Width::X64 => hash64(&values),
        Width::X86 => {
            let narrowed = values
                .iter()
                .map(|&v| i32::try_from(v).with_context(|| format!("{v} does not fit in 32 bits")))
                .collect::<Result<Vec<_>>>()?;
            hash32(&narrowed) as i64
        }
        Width::Native => {
            let native = values
                .iter()
                .map(|&v| isize::try_from(v).with_context(|| format!("{v} does not fit in isize")))
                .collect::<Result<Vec<_>>>()?;
            hash(&native) as i64
        }
    };
    let two_lanes = match width {
        Width::X64 => true,
        Width::X86 => false,
        Width::Native => cfg!(target_pointer_width = "64"),
    };
    if two_lanes && values.len() % 2 == 1 {
        log_debug!("odd count: last value only reaches the first lane");
    }
    println!("{}", result);

    Ok(())
}
