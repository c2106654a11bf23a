//! An interactive cooking session over one recipe.

use std::io::{self, BufRead, Write};

use sous_steps::Step;
use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::lookup::LookupTables;
use crate::navigator::StepNavigator;
use crate::router;

/// Everything a query can read or move: the step cursor, the lookup tables
/// and the session settings.
pub struct Session<'t> {
    pub(crate) navigator: StepNavigator,
    pub(crate) tables: &'t LookupTables,
    pub(crate) config: SessionConfig,
}

impl<'t> Session<'t> {
    pub fn new(steps: Vec<Step>, tables: &'t LookupTables, config: SessionConfig) -> Self {
        Session {
            navigator: StepNavigator::new(steps),
            tables,
            config,
        }
    }

    pub fn navigator(&self) -> &StepNavigator {
        &self.navigator
    }

    pub fn cursor(&self) -> u32 {
        self.navigator.cursor()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Answer one query. Always produces a reply.
    pub fn respond(&mut self, query: &str) -> String {
        router::dispatch(self, query)
    }

    /// Read queries line by line and write one reply per query, until `exit`,
    /// `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{}", self.config.greeting)?;
        info!(steps = self.navigator.total_steps(), "session started");

        let mut lines = input.lines();
        loop {
            write!(output, "\n{}", self.config.prompt)?;
            output.flush()?;

            let Some(line) = lines.next() else {
                debug!("input closed");
                writeln!(output)?;
                break;
            };
            let query = line?;
            let query = query.trim();
            // Blank lines only re-prompt.
            if query.is_empty() {
                continue;
            }
            if is_exit(query) {
                writeln!(output, "{}", self.config.farewell)?;
                break;
            }

            let reply = self.respond(query);
            writeln!(output, "{reply}")?;
        }

        info!(cursor = self.cursor(), "session ended");
        Ok(())
    }
}

fn is_exit(query: &str) -> bool {
    query.eq_ignore_ascii_case("exit") || query.eq_ignore_ascii_case("quit")
}
