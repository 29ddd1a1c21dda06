//! Simple command that prints one or '-n count' UUIDv4 strings, or a name-based UUID
//!
//! ```text
//! uuid [-n count]
//! uuid -3|-5 dns|url|oid|x500 name
//! ```

use std::{env, io, io::Write, process::ExitCode};

use rfc4122::{namespace, Uuid};

#[derive(Debug, PartialEq)]
enum Command {
    Random(usize),
    NameBased { version: u8, namespace: Uuid, name: String },
}

fn main() -> io::Result<ExitCode> {
    let command = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(command) => command,
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!(
                    "Usage: {0} [-n count]\n       {0} -3|-5 dns|url|oid|x500 name",
                    program.as_deref().unwrap_or("uuid")
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let mut buf = io::BufWriter::new(io::stdout());
    match command {
        Command::Random(count) => {
            for _ in 0..count {
                writeln!(buf, "{}", rfc4122::uuid4())?;
            }
        }
        Command::NameBased {
            version,
            namespace,
            name,
        } => {
            let uuid = match version {
                3 => rfc4122::uuid3(&namespace, &name),
                _ => rfc4122::uuid5(&namespace, &name),
            };
            writeln!(buf, "{}", uuid)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Command, String> {
    let mut count = None;
    while let Some(arg) = args.next() {
        let version = match arg.as_str() {
            "-n" => {
                if count.is_some() {
                    return Err("option 'n' given more than once".to_owned());
                }
                let Some(n_arg) = args.next() else {
                    return Err("argument to option 'n' missing".to_owned());
                };
                let Ok(c) = n_arg.parse() else {
                    return Err(format!("invalid argument to option 'n': '{}'", n_arg));
                };
                count.replace(c);
                continue;
            }
            "-3" => 3,
            "-5" => 5,
            _ => return Err(format!("unrecognized argument '{}'", arg)),
        };

        if count.is_some() {
            return Err("option 'n' cannot be combined with a name".to_owned());
        }
        let namespace = match args.next().as_deref() {
            Some("dns") => namespace::DNS,
            Some("url") => namespace::URL,
            Some("oid") => namespace::OID,
            Some("x500") => namespace::X500,
            Some(other) => match Uuid::parse(other) {
                Ok(ns) => ns,
                Err(_) => return Err(format!("invalid namespace '{}'", other)),
            },
            None => return Err("namespace missing".to_owned()),
        };
        let Some(name) = args.next() else {
            return Err("name missing".to_owned());
        };
        if let Some(extra) = args.next() {
            return Err(format!("unrecognized argument '{}'", extra));
        }
        return Ok(Command::NameBased {
            version,
            namespace,
            name,
        });
    }
    Ok(Command::Random(count.unwrap_or(1)))
}

#[cfg(test)]
mod tests {
    use super::{parse_args, Command};
    use rfc4122::namespace;

    fn args(src: &[&str]) -> impl Iterator<Item = String> {
        src.iter().map(|e| e.to_string()).collect::<Vec<_>>().into_iter()
    }

    /// Parses count and name-based options
    #[test]
    fn parses_count_and_name_based_options() {
        assert_eq!(parse_args(args(&[])), Ok(Command::Random(1)));
        assert_eq!(parse_args(args(&["-n", "8"])), Ok(Command::Random(8)));
        assert_eq!(
            parse_args(args(&["-5", "dns", "python.org"])),
            Ok(Command::NameBased {
                version: 5,
                namespace: namespace::DNS,
                name: "python.org".to_owned(),
            })
        );
    }

    /// Rejects malformed arguments
    #[test]
    fn rejects_malformed_arguments() {
        for e in [
            &["-n"][..],
            &["-n", "x"],
            &["-n", "1", "-n", "2"],
            &["-3", "dns"],
            &["-3", "bogus", "name"],
            &["-5", "dns", "a", "b"],
            &["-x"],
        ] {
            assert!(parse_args(args(e)).is_err(), "{:?}", e);
        }
    }
}
