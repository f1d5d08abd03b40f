//! The ordering conversation: initial order, check, then change requests.
//!
//! ```text
//! greet -> pizzas ("done") -> drinks ("done") -> check
//!       -> loop { "modify? [y/N]" -> change line -> check }
//! ```
//!
//! End of input ends the conversation at any point.

use std::io::{self, BufRead, Write};

use slice_core::{
    LineError, OrderPhase, OrderSession, SummaryOptions, drink_menu, flavor_menu, render_check,
};

use crate::console::{Console, Tone};

const DONE: &str = "done";
const NOT_CARRIED: &str = "Seems to be something we don't have, please enter your request again";

/// Whether the conversation reached its natural end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// The customer declined further changes.
    Confirmed,
    /// Input ran out first.
    InputClosed,
}

enum Step {
    Continue,
    Stop(Ending),
}

pub struct Conversation<R, W> {
    console: Console<R, W>,
    session: OrderSession,
    shop_name: String,
    summary: SummaryOptions,
}

impl<R: BufRead, W: Write> Conversation<R, W> {
    pub fn new(console: Console<R, W>, shop_name: impl Into<String>, summary: SummaryOptions) -> Self {
        Self {
            console,
            session: OrderSession::new(),
            shop_name: shop_name.into(),
            summary,
        }
    }

    pub fn session(&self) -> &OrderSession {
        &self.session
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (OrderSession, Console<R, W>) {
        (self.session, self.console)
    }

    pub fn run(&mut self) -> io::Result<Ending> {
        let greeting = format!(
            "Welcome to {}. Please begin with your order.\nWhen finished in every step, please just type",
            self.shop_name
        );
        self.console
            .say(&[(Tone::Prompt, greeting.as_str()), (Tone::Highlight, "done.")])?;

        for phase in [OrderPhase::Pizzas, OrderPhase::Drinks] {
            if let Step::Stop(ending) = self.take_phase(phase)? {
                return Ok(ending);
            }
        }

        self.print_check()?;

        loop {
            let Some(answer) = self.console.ask(&[(
                Tone::Prompt,
                "Do you wish to modify your order? [y/N]:",
            )])?
            else {
                return Ok(Ending::InputClosed);
            };

            if !matches!(answer.as_str(), "y" | "yes") {
                self.console.say(&[(
                    Tone::Summary,
                    "Thanks for your order, we will be delivering it soon!",
                )])?;
                return Ok(Ending::Confirmed);
            }

            let Some(request) = self
                .console
                .ask(&[(Tone::Prompt, "What do you want to change?:")])?
            else {
                return Ok(Ending::InputClosed);
            };

            if let Err(err) = self.session.change(&request) {
                self.console.say(&[(Tone::Error, err.to_string().as_str())])?;
            }
            self.print_check()?;
        }
    }

    fn take_phase(&mut self, phase: OrderPhase) -> io::Result<Step> {
        let (intro, menu, example, again) = match phase {
            OrderPhase::Pizzas => (
                "First, lets start with your food. Available pizza options are:",
                flavor_menu(),
                "Please input your choice by selecting quantity and flavor. E.g. 2 pepperoni pizzas",
                "Anything else? You can still add some more flavors:",
            ),
            OrderPhase::Drinks => (
                "Now, lets pick your drinks. Available drinks options are:",
                drink_menu(),
                "Please input your choice by selecting quantity and flavor. E.g. 2 diet sodas",
                "Anything else? You can still add some more drinks:",
            ),
        };

        self.console
            .say(&[(Tone::Prompt, intro), (Tone::Highlight, menu.as_str())])?;
        self.console.say(&[(Tone::Prompt, example)])?;

        let mut first = true;
        loop {
            let line = if first {
                first = false;
                self.console.read_line()?
            } else {
                self.console.ask(&[(Tone::Prompt, again)])?
            };
            let Some(line) = line else {
                return Ok(Step::Stop(Ending::InputClosed));
            };

            if line == DONE {
                return Ok(Step::Continue);
            }

            if let Err(err) = self.session.take_initial(phase, &line) {
                let message = match err {
                    LineError::Malformed(_) => NOT_CARRIED.to_string(),
                    other => other.to_string(),
                };
                self.console.say(&[(Tone::Error, message.as_str())])?;
            }
        }
    }

    fn print_check(&mut self) -> io::Result<()> {
        let rendered = render_check(self.session.check(), self.summary);
        let line = format!("Your current check is: {rendered}");
        self.console.say(&[(Tone::Summary, line.trim_end())])
    }
}
