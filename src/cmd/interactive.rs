use crate::reports;
use clap::Args;
use pennant::config::{SearchParams, MAX_QUANTITY, MIN_QUANTITY};
use pennant::error::{PennantError, PennantResult};
use pennant::optimizer::Optimizer;
use pennant::pile::Pile;
use std::io::{self, BufRead, Write};

const INPUT_FIELD: &str = "Input: ";
const INVALID_INPUT: &str = "Not a valid input.\n";

#[derive(Args, Debug, Clone)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub search: SearchParams,
}

/// Line-based prompts. Every prompt repeats until it gets a valid answer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn say(&mut self, text: &str) -> PennantResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    fn read_answer(&mut self) -> PennantResult<String> {
        self.say(INPUT_FIELD)?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Yes/no question answered with `y` or `n` in either case.
    pub fn decision(&mut self, text: &str) -> PennantResult<bool> {
        self.say(text)?;
        loop {
            match self.read_answer()?.to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.say(INVALID_INPUT)?,
            }
        }
    }

    /// Waits for `x` before continuing.
    pub fn action(&mut self, text: &str) -> PennantResult<()> {
        self.say(text)?;
        while self.read_answer()?.to_lowercase() != "x" {
            self.say(INVALID_INPUT)?;
        }
        Ok(())
    }

    pub fn text(&mut self, text: &str) -> PennantResult<String> {
        self.say(text)?;
        loop {
            let answer = self.read_answer()?;
            if !answer.trim().is_empty() {
                return Ok(answer);
            }
            self.say(INVALID_INPUT)?;
        }
    }

    /// Integer within `[min, max]`.
    pub fn quantity(&mut self, text: &str, min: i64, max: i64) -> PennantResult<i64> {
        if min < 0 || max <= min {
            return Err(PennantError::InvalidArgument(format!(
                "Quantity bounds {}..={} set incorrectly",
                min, max
            )));
        }
        self.say(text)?;
        loop {
            match self.read_answer()?.trim().parse::<i64>() {
                Ok(n) if (min..=max).contains(&n) => return Ok(n),
                _ => self.say(INVALID_INPUT)?,
            }
        }
    }

    fn color_with_quantity(&mut self, pile: &mut Pile, color: String) -> PennantResult<()> {
        let count = self.quantity(
            &format!("\nHow many {} pennants would you like to have?\n", color),
            MIN_QUANTITY,
            MAX_QUANTITY,
        )?;
        pile.set(color, count)
    }

    /// Asks for colours and counts until the user is done, or hands out the
    /// demo pile when asked to.
    pub fn collect_pile(&mut self) -> PennantResult<Pile> {
        if self.decision("\nTest Mode? (Y)/(N)\n")? {
            return Ok(Pile::demo());
        }

        let mut pile = Pile::new();
        let color = self.text("\nType in a pennant color!\n")?.to_lowercase();
        self.color_with_quantity(&mut pile, color)?;

        while self.decision("\nWould you like to have additional colors? (Y)/(N)\n")? {
            let color = self.text("\nType in a pennant color!\n")?.to_lowercase();
            if pile.contains(&color.as_str().into()) {
                self.say("\nThat color is already existing.\n")?;
                continue;
            }
            self.color_with_quantity(&mut pile, color)?;
        }
        Ok(pile)
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }
}

pub fn run(args: InteractiveArgs) -> PennantResult<()> {
    let strategies = args.search.strategies(&[])?;
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    prompter.say("\n#######################\nPENNANT CHAIN OPTIMIZER\n#######################\n")?;

    while prompter.decision("\nWould you like to calculate an optimized pennant chain? (Y)/(N)\n")? {
        let pile = prompter.collect_pile()?;
        prompter.action("\nStart the machine! (X)\n")?;

        let mut optimizer = Optimizer::new(pile, args.search.seed)?;
        let results = optimizer.run_all(&strategies)?;
        for result in &results {
            reports::print_result(result);
        }
        reports::print_summary(&results);
        prompter.output().flush()?;
    }

    prompter.say("\nThe program is terminated.\n")?;
    Ok(())
}
