use precis::{Number, Unit, Value};

// Line format: name(arg, ...) with a trailing optional precision, eg
//   sin(30, d, 50)   ln(2.5, 80)   power(2, -3)   fact(20)   pi(100)

fn main() -> Result<(), String> {
    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        match eval_line(input.as_str()) {
            Err(e) => println!("Eval err: {}", e),
            Ok(out) => println!("{}", out),
        }
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    loop {
        match rl.readline("~> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);
                match eval_line(line.as_str()) {
                    Err(e) => println!("Eval err: {}", e),
                    Ok(out) => println!("{}", out),
                }
            }
        }
    }
}

fn eval_line(line: &str) -> Result<String, String> {
    let (name, args) = parse_call(line)?;
    dispatch(name, &args)
}

fn parse_call(line: &str) -> Result<(&str, Vec<&str>), String> {
    let line = line.trim();
    let Some(open) = line.find('(') else {
        // bare word, eg "pi"
        return Ok((line, Vec::new()));
    };
    let Some(rest) = line[open + 1..].strip_suffix(')') else {
        return Err(format!("missing closing paren in {:?}", line));
    };
    let name = line[..open].trim();
    let args = rest
        .split(',')
        .map(|a| a.trim())
        .filter(|a| !a.is_empty())
        .collect();
    Ok((name, args))
}

fn number_arg(s: &str) -> Result<Number, String> {
    s.parse::<Number>().map_err(|e| e.to_string())
}

fn int_arg(s: &str) -> Result<i64, String> {
    s.parse::<i64>().map_err(|e| format!("bad integer {:?}: {}", s, e))
}

fn prec_arg(s: Option<&&str>) -> Result<u32, String> {
    match s {
        None => Ok(36),
        Some(s) => s.parse::<u32>().map_err(|e| format!("bad precision {:?}: {}", s, e)),
    }
}

fn unit_arg(s: Option<&&str>) -> Result<Unit, String> {
    match s {
        None => Ok(Unit::Degree),
        Some(s) => s.parse::<Unit>().map_err(|e| e.to_string()),
    }
}

fn show(v: Value) -> String {
    v.to_string()
}

fn dispatch(name: &str, args: &[&str]) -> Result<String, String> {
    let err = |e: precis::Error| e.to_string();
    match name {
        "pi" | "e" | "ln2" | "ln3" | "ln10" | "sqrt2" | "sqrt10" => {
            if args.len() > 1 {
                return Err(format!("{} takes at most a precision", name));
            }
            let prec = prec_arg(args.first())?;
            let v = match name {
                "pi" => precis::pi(prec),
                "e" => precis::e(prec),
                "ln2" => precis::ln2(prec),
                "ln3" => precis::ln3(prec),
                "ln10" => precis::ln10(prec),
                "sqrt2" => precis::sqrt2(prec),
                _ => precis::sqrt10(prec),
            }
            .map_err(err)?;
            Ok(v.to_string())
        }
        "ln" | "lg" | "exp" | "sqrt" | "sinh" | "cosh" | "tanh" | "coth" | "sech" | "cosech"
        | "asinh" | "acosh" | "atanh" | "acoth" | "asech" | "acosech" | "gamma" | "erf"
        | "erfc" => {
            if args.is_empty() || args.len() > 2 {
                return Err(format!("{} takes (x, prec?)", name));
            }
            let x = number_arg(args[0])?;
            let prec = prec_arg(args.get(1))?;
            let v = match name {
                "ln" => precis::ln(x, prec),
                "lg" => precis::lg(x, prec),
                "exp" => precis::exp(x, prec),
                "sqrt" => precis::sqrt(x, prec),
                "sinh" => precis::sinh(x, prec),
                "cosh" => precis::cosh(x, prec),
                "tanh" => precis::tanh(x, prec),
                "coth" => precis::coth(x, prec),
                "sech" => precis::sech(x, prec),
                "cosech" => precis::cosech(x, prec),
                "asinh" => precis::asinh(x, prec),
                "acosh" => precis::acosh(x, prec),
                "atanh" => precis::atanh(x, prec),
                "acoth" => precis::acoth(x, prec),
                "asech" => precis::asech(x, prec),
                "acosech" => precis::acosech(x, prec),
                "gamma" => precis::gamma(x, prec),
                "erf" => precis::erf(x, prec),
                _ => precis::erfc(x, prec),
            }
            .map_err(err)?;
            Ok(show(v))
        }
        "sin" | "cos" | "tan" | "cot" | "sec" | "cosec" | "asin" | "acos" | "atan" | "acot"
        | "asec" | "acosec" => {
            if args.is_empty() || args.len() > 3 {
                return Err(format!("{} takes (x, unit?, prec?)", name));
            }
            let x = number_arg(args[0])?;
            let unit = unit_arg(args.get(1))?;
            let prec = prec_arg(args.get(2))?;
            let v = match name {
                "sin" => precis::sin(x, unit, prec),
                "cos" => precis::cos(x, unit, prec),
                "tan" => precis::tan(x, unit, prec),
                "cot" => precis::cot(x, unit, prec),
                "sec" => precis::sec(x, unit, prec),
                "cosec" => precis::cosec(x, unit, prec),
                "asin" => precis::asin(x, unit, prec),
                "acos" => precis::acos(x, unit, prec),
                "atan" => precis::atan(x, unit, prec),
                "acot" => precis::acot(x, unit, prec),
                "asec" => precis::asec(x, unit, prec),
                _ => precis::acosec(x, unit, prec),
            }
            .map_err(err)?;
            Ok(show(v))
        }
        "power" | "beta" => {
            if args.len() < 2 || args.len() > 3 {
                return Err(format!("{} takes (x, y, prec?)", name));
            }
            let x = number_arg(args[0])?;
            let y = number_arg(args[1])?;
            let prec = prec_arg(args.get(2))?;
            let v = if name == "power" {
                precis::power(x, y, prec)
            } else {
                precis::beta(x, y, prec)
            }
            .map_err(err)?;
            Ok(show(v))
        }
        "fact" => {
            if args.len() != 1 {
                return Err("fact takes (n)".to_string());
            }
            Ok(precis::fact(int_arg(args[0])?).map_err(err)?.to_string())
        }
        "ncr" | "npr" => {
            if args.len() != 2 {
                return Err(format!("{} takes (n, r)", name));
            }
            let n = int_arg(args[0])?;
            let r = int_arg(args[1])?;
            let v = if name == "ncr" {
                precis::ncr(n, r)
            } else {
                precis::npr(n, r)
            }
            .map_err(err)?;
            Ok(v.to_string())
        }
        "euler" => {
            if args.len() != 1 {
                return Err("euler takes (r)".to_string());
            }
            Ok(precis::euler_number(int_arg(args[0])?).map_err(err)?.to_string())
        }
        "bernoulli" => {
            if args.len() != 1 {
                return Err("bernoulli takes (r)".to_string());
            }
            Ok(precis::bernoulli_number(int_arg(args[0])?).map_err(err)?.to_string())
        }
        "tangent" => {
            if args.len() != 1 {
                return Err("tangent takes (r)".to_string());
            }
            Ok(precis::tangent_number(int_arg(args[0])?).map_err(err)?.to_string())
        }
        other => Err(format!("unknown function {:?}", other)),
    }
}
