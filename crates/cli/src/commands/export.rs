use std::path::Path;
use std::process;

use kitforge_core::{Catalog, Registry};

use super::{report_written, write_file};
use crate::{report_error, OutputFormat};

pub(crate) fn cmd_export(out: Option<&Path>, output: OutputFormat, quiet: bool) {
    let json = match Catalog::from_registry(&Registry::builtin()).to_json_pretty() {
        Ok(j) => j,
        Err(e) => {
            report_error(&format!("could not serialize catalog: {}", e), output, quiet);
            process::exit(1);
        }
    };

    match out {
        Some(path) => {
            if let Err(msg) = write_file(path, &format!("{}\n", json)) {
                report_error(&msg, output, quiet);
                process::exit(1);
            }
            report_written(path, output, quiet);
        }
        None => println!("{}", json),
    }
}
