use async_trait::async_trait;
use rand::Rng;

use crate::application::errors::CommandError;
use crate::domain::entities::{CommandContext, CommandDefinition, CommandHandler};
use crate::domain::traits::Bot;

const DEFAULT_SIDES: i64 = 6;
const MIN_SIDES: i64 = 2;
const MAX_SIDES: i64 = 100;

pub struct Dice;

/// Integer at the start of `arg`, ignoring anything after the digits
///
/// `"6abc"` reads as 6 and `"3.5"` as 3; no leading digits means no number.
fn leading_int(arg: &str) -> Option<i64> {
    let unsigned = arg.strip_prefix(['+', '-']).unwrap_or(arg);
    let sign_len = arg.len() - unsigned.len();
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    arg[..sign_len + digits].parse().ok()
}

/// Sides requested by the first argument, if it is an acceptable die
fn parse_sides(args: &[String]) -> Option<i64> {
    let sides = match args.first() {
        Some(arg) => leading_int(arg)?,
        None => DEFAULT_SIDES,
    };
    (MIN_SIDES..=MAX_SIDES).contains(&sides).then_some(sides)
}

#[async_trait]
impl CommandHandler for Dice {
    async fn execute(&self, ctx: &CommandContext, bot: &dyn Bot) -> Result<(), CommandError> {
        let reply = match parse_sides(&ctx.args) {
            Some(sides) => {
                let result = rand::thread_rng().gen_range(1..=sides);
                format!("{} rolled a {} (1-{})", ctx.user.mention(), result, sides)
            }
            None => format!(
                "{} Please provide a valid number between {} and {}",
                ctx.user.mention(), MIN_SIDES, MAX_SIDES
            ),
        };

        bot.send(&ctx.channel, &reply).await?;
        Ok(())
    }
}

pub fn definition() -> CommandDefinition {
    CommandDefinition::new("dice", Dice)
        .with_aliases(["roll"])
        .with_description("Roll a dice (1-6) or specify sides")
        .with_usage("dice [sides]")
        .with_cooldown(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{context, RecordingBot};

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_sides() {
        assert_eq!(parse_sides(&[]), Some(6));
        assert_eq!(parse_sides(&args(&["20"])), Some(20));
        assert_eq!(parse_sides(&args(&["2"])), Some(2));
        assert_eq!(parse_sides(&args(&["100", "extra"])), Some(100));
        assert_eq!(parse_sides(&args(&["1"])), None);
        assert_eq!(parse_sides(&args(&["101"])), None);
        assert_eq!(parse_sides(&args(&["-4"])), None);
        assert_eq!(parse_sides(&args(&["many"])), None);
    }

    #[test]
    fn test_sides_read_leading_digits() {
        assert_eq!(parse_sides(&args(&["6abc"])), Some(6));
        assert_eq!(parse_sides(&args(&["3.5"])), Some(3));
        assert_eq!(parse_sides(&args(&["+5"])), Some(5));
        assert_eq!(parse_sides(&args(&["20sides"])), Some(20));
        assert_eq!(parse_sides(&args(&["-"])), None);
        assert_eq!(parse_sides(&args(&["x6"])), None);
        assert_eq!(parse_sides(&args(&["99999999999999999999"])), None);
    }

    #[tokio::test]
    async fn test_roll_stays_in_range() {
        let bot = RecordingBot::new();
        for _ in 0..20 {
            Dice.execute(&context(&["3"]), &bot).await.unwrap();
        }

        for line in bot.lines() {
            assert!(
                line == "@viewer rolled a 1 (1-3)"
                    || line == "@viewer rolled a 2 (1-3)"
                    || line == "@viewer rolled a 3 (1-3)",
                "unexpected roll: {}",
                line
            );
        }
    }

    #[tokio::test]
    async fn test_invalid_sides() {
        let bot = RecordingBot::new();
        Dice.execute(&context(&["1000"]), &bot).await.unwrap();

        assert_eq!(
            bot.lines(),
            vec!["@viewer Please provide a valid number between 2 and 100"]
        );
    }
}
