//! The query shell: loads a variant, maintains a position, answers check queries.

use std::io::{BufRead, Write};
use std::sync::Arc;

use tracing::{debug, info, warn};

use boundless_core::{Player, RawKind, find_colinear_pair};
use boundless_rules::{
    Attacker, ColinearPolicy, FourDimensional, Position, Variant, detect_check, is_square_attacked,
};

use crate::command::{Command, ShellOption, VariantSpec, parse_command};
use crate::error::ShellError;

/// Configuration knobs adjustable via `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellConfig {
    /// Report every attacker, not just whether one exists.
    pub track_attackers: bool,
    /// Applied the next time a variant loads.
    pub colinear_policy: ColinearPolicy,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            track_attackers: true,
            colinear_policy: ColinearPolicy::Warn,
        }
    }
}

/// The shell, holding the current position and the output sink.
pub struct Shell<W: Write> {
    position: Position,
    /// Layout of the loaded 4D variant, used to rebuild its walls on `clear`.
    layout: Option<FourDimensional>,
    config: ShellConfig,
    out: W,
}

impl<W: Write> Shell<W> {
    /// Create a shell on an empty classical board.
    ///
    /// # Errors
    ///
    /// [`ShellError::Variant`] if the classical variant fails to load.
    pub fn new(out: W) -> Result<Self, ShellError> {
        let config = ShellConfig::default();
        let variant = Arc::new(Variant::classical(config.colinear_policy)?);
        Ok(Self {
            position: Position::empty(variant),
            layout: None,
            config,
            out,
        })
    }

    pub fn config(&self) -> ShellConfig {
        self.config
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Run the command loop until `quit` or the input ends.
    ///
    /// Malformed commands and refused updates are reported and the loop continues; only
    /// I/O failures end it early.
    pub fn run(mut self, input: impl BufRead) -> Result<W, ShellError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            debug!(cmd = %trimmed, "received shell command");
            let result = parse_command(trimmed).and_then(|cmd| self.execute(cmd));
            match result {
                Ok(true) => {}
                Ok(false) => break,
                Err(ShellError::Io { source }) => return Err(ShellError::Io { source }),
                Err(e) => {
                    warn!(error = %e, "shell command failed");
                    writeln!(self.out, "error {e}")?;
                }
            }
        }
        info!("shell shutting down");
        Ok(self.out)
    }

    /// Execute one command. Returns `false` when the shell should stop.
    pub fn execute(&mut self, command: Command) -> Result<bool, ShellError> {
        match command {
            Command::Variant(spec) => self.handle_variant(spec)?,
            Command::Place(kind, coords) => {
                self.position.place(kind, coords)?;
            }
            Command::Remove(coords) => {
                self.position.take(coords)?;
            }
            Command::Clear => self.handle_clear()?,
            Command::Check(player) => self.handle_check(player)?,
            Command::Attacked(square, friendly) => {
                let mut attackers = self.config.track_attackers.then(Vec::new);
                let attacked = is_square_attacked(&self.position, square, friendly, attackers.as_mut());
                writeln!(self.out, "attacked {square} {}", yes_no(attacked))?;
                self.write_attackers(attackers.as_deref())?;
            }
            Command::Colinear => match find_colinear_pair(self.position.variant().directions()) {
                Some((first, second)) => writeln!(self.out, "colinear {first} {second}")?,
                None => writeln!(self.out, "colinear none")?,
            },
            Command::Show => self.handle_show()?,
            Command::Validate => {
                self.position.index().validate()?;
                writeln!(
                    self.out,
                    "index ok pieces {} gaps {} missing {}",
                    self.position.index().len(),
                    self.position.index().gaps(),
                    self.position.variant().movesets().missing_lookups()
                )?;
            }
            Command::SetOption(option) => self.handle_setoption(option),
            Command::Quit => return Ok(false),
            Command::Unknown(cmd) => {
                if !cmd.is_empty() {
                    debug!(cmd = %cmd, "ignoring unknown command");
                }
            }
        }
        Ok(true)
    }

    fn handle_variant(&mut self, spec: VariantSpec) -> Result<(), ShellError> {
        let policy = self.config.colinear_policy;
        let (variant, layout) = match spec {
            VariantSpec::Classical => (Variant::classical(policy)?, None),
            VariantSpec::FourDimensional(layout) => (layout.variant(policy)?, Some(layout)),
        };
        let variant = Arc::new(variant);
        let position = match layout {
            Some(layout) => Position::new(Arc::clone(&variant), layout.uniform_position(&[]))?,
            None => Position::empty(Arc::clone(&variant)),
        };

        info!(variant = %variant.name(), pieces = position.index().len(), "variant set up");
        writeln!(
            self.out,
            "variant {} directions {}",
            variant.name(),
            variant.directions().len()
        )?;
        self.position = position;
        self.layout = layout;
        Ok(())
    }

    fn handle_clear(&mut self) -> Result<(), ShellError> {
        let variant = self.position.variant_handle();
        self.position = match self.layout {
            Some(layout) => Position::new(variant, layout.uniform_position(&[]))?,
            None => Position::empty(variant),
        };
        Ok(())
    }

    fn handle_check(&mut self, player: Player) -> Result<(), ShellError> {
        let result = detect_check(&self.position, player, self.config.track_attackers);
        writeln!(self.out, "check {player} {}", yes_no(result.in_check))?;
        for royal in &result.royals_in_check {
            writeln!(self.out, "royal {royal}")?;
        }
        self.write_attackers(result.attackers.as_deref())
    }

    fn handle_show(&mut self) -> Result<(), ShellError> {
        let mut pieces: Vec<_> = self
            .position
            .index()
            .iter()
            .filter(|p| p.kind.kind() != RawKind::Void)
            .map(|p| (p.coords, p.kind))
            .collect();
        pieces.sort();
        for (coords, kind) in pieces {
            writeln!(self.out, "piece {kind} {coords}")?;
        }
        Ok(())
    }

    fn handle_setoption(&mut self, option: ShellOption) {
        match option {
            ShellOption::TrackAttackers(on) => self.config.track_attackers = on,
            ShellOption::ColinearPolicy(policy) => self.config.colinear_policy = policy,
        }
        debug!(config = ?self.config, "option set");
    }

    fn write_attackers(&mut self, attackers: Option<&[Attacker]>) -> Result<(), ShellError> {
        for attacker in attackers.unwrap_or_default() {
            write!(self.out, "attacker {}", attacker.coords)?;
            if attacker.sliding_check {
                write!(self.out, " sliding")?;
            }
            if let Some(path) = &attacker.path {
                write!(self.out, " path")?;
                for step in path {
                    write!(self.out, " {step}")?;
                }
            }
            writeln!(self.out)?;
        }
        Ok(())
    }
}

fn yes_no(b: bool) -> &'static str {
    if b { "yes" } else { "no" }
}
