//! Command line interface

use clap::{Args, Parser, Subcommand, ValueEnum};
use gatesim::circuit::generators::{adder, buffer};
use gatesim::circuit::stats::stats;
use gatesim::config::DEFAULT_MAX_DEPTH;
use gatesim::{Alu, Byte, Circuit, Result, SimConfig};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Command line arguments
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print every change on the boundary wires of full adders
    #[arg(long, global = true)]
    pub monitor: bool,

    /// Maximum propagation depth before reporting a combinational loop
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Simulation settings from the command line
    pub fn config(&self) -> SimConfig {
        SimConfig::default()
            .with_max_depth(self.max_depth)
            .with_monitor(self.monitor)
    }

    /// Default log filter for the verbosity level
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 if self.monitor => "info",
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Command line arguments
#[derive(Subcommand)]
pub enum Commands {
    /// Add two 8-bit numbers
    ///
    /// Prints the carry followed by the 8-bit sum.
    #[clap()]
    Add(BinaryArgs),

    /// Subtract two 8-bit numbers
    ///
    /// The second number is negated in two's complement, then added to the first.
    /// Prints the carry followed by the 8-bit result.
    #[clap(alias = "subtract")]
    Sub(BinaryArgs),

    /// Add one to an 8-bit number
    #[clap(alias = "inc")]
    Increment(UnaryArgs),

    /// One's complement of an 8-bit number
    #[clap(alias = "not")]
    Complement(UnaryArgs),

    /// Two's complement negation of an 8-bit number
    #[clap(alias = "neg")]
    Negate(UnaryArgs),

    /// Copy an 8-bit number through pairs of inverters
    #[clap(alias = "pass-through")]
    Pass(UnaryArgs),

    /// Show statistics about a library circuit
    #[clap()]
    Show(ShowArgs),

    /// Check the circuits against native arithmetic on random operands
    #[clap()]
    Check(CheckArgs),
}

/// Command arguments for operations on two numbers
#[derive(Args)]
pub struct BinaryArgs {
    /// First operand, as 8 bits
    a: String,
    /// Second operand, as 8 bits
    b: String,
}

impl BinaryArgs {
    pub fn add(&self, alu: &Alu) -> Result<()> {
        let r = alu.add_carry(self.a.parse()?, self.b.parse()?)?;
        println!("{r}");
        Ok(())
    }

    pub fn sub(&self, alu: &Alu) -> Result<()> {
        let r = alu.subtract(self.a.parse()?, self.b.parse()?)?;
        println!("{r}");
        Ok(())
    }
}

/// Command arguments for operations on one number
#[derive(Args)]
pub struct UnaryArgs {
    /// Operand, as 8 bits
    a: String,
}

impl UnaryArgs {
    pub fn increment(&self, alu: &Alu) -> Result<()> {
        println!("{}", alu.increment(self.a.parse()?)?);
        Ok(())
    }

    pub fn complement(&self, alu: &Alu) -> Result<()> {
        println!("{}", alu.complement_one(self.a.parse()?)?);
        Ok(())
    }

    pub fn negate(&self, alu: &Alu) -> Result<()> {
        println!("{}", alu.negate(self.a.parse()?)?);
        Ok(())
    }

    pub fn pass(&self, alu: &Alu) -> Result<()> {
        println!("{}", alu.pass_through(self.a.parse()?)?);
        Ok(())
    }
}

/// Circuits of the library
#[derive(Clone, Copy, ValueEnum)]
pub enum CircuitChoice {
    Not,
    And,
    Or,
    Xor,
    HalfAdder,
    FullAdder,
    RippleCarry,
    Complement,
    Pass,
}

/// Command arguments for circuit informations
#[derive(Args)]
pub struct ShowArgs {
    /// Circuit to show
    #[arg(value_enum)]
    circuit: CircuitChoice,

    /// Number of bits for multi-bit circuits
    #[arg(short, long, default_value_t = 8)]
    width: usize,

    /// Also print every component and wire
    #[arg(long)]
    netlist: bool,
}

impl ShowArgs {
    pub fn run(&self, config: SimConfig) -> Result<()> {
        let mut c = Circuit::with_config(config);
        match self.circuit {
            CircuitChoice::Not => {
                c.add_not("I1", None);
            }
            CircuitChoice::And => {
                c.add_and("A1", None);
            }
            CircuitChoice::Or => {
                c.add_or("O1", None);
            }
            CircuitChoice::Xor => {
                c.add_xor("X1", None);
            }
            CircuitChoice::HalfAdder => {
                c.add_half_adder("H1", None);
            }
            CircuitChoice::FullAdder => {
                c.add_full_adder("F0", None);
            }
            CircuitChoice::RippleCarry => {
                adder::ripple_carry(&mut c, "add", self.width);
            }
            CircuitChoice::Complement => {
                buffer::inverter_bank(&mut c, "complement", self.width);
            }
            CircuitChoice::Pass => {
                buffer::double_inverter_bank(&mut c, "pass", self.width);
            }
        }
        c.check_acyclic()?;
        println!("Circuit stats:\n{}", stats(&c));
        if self.netlist {
            println!("{c}");
        }
        Ok(())
    }
}

/// Command arguments for the randomized self-check
#[derive(Args)]
pub struct CheckArgs {
    /// Random seed for operand generation
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Number of random operand pairs
    #[arg(short = 'n', long, default_value_t = 256)]
    count: usize,
}

impl CheckArgs {
    pub fn run(&self, alu: &Alu) -> Result<()> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        for _ in 0..self.count {
            let a: u8 = rng.gen();
            let b: u8 = rng.gen();
            let (x, y) = (Byte::from(a), Byte::from(b));
            let checks = [
                ("add", u8::from(alu.add_carry(x, y)?.sum), a.wrapping_add(b)),
                ("sub", u8::from(alu.subtract(x, y)?.sum), a.wrapping_sub(b)),
                ("increment", u8::from(alu.increment(x)?.sum), a.wrapping_add(1)),
                ("negate", u8::from(alu.negate(x)?.sum), a.wrapping_neg()),
                ("complement", u8::from(alu.complement_one(x)?), !a),
                ("pass", u8::from(alu.pass_through(x)?), a),
            ];
            for (op, got, expected) in checks {
                if got != expected {
                    println!("Mismatch for {op} on {x} {y}:");
                    println!("    got      {}", Byte::from(got));
                    println!("    expected {}", Byte::from(expected));
                    std::process::exit(1);
                }
            }
        }
        println!("{} random operand pairs checked", self.count);
        Ok(())
    }
}
