use lib::prelude::*;

#[entry(input = "d03.txt", expect = (161, 48))]
fn main(input: IStr) -> Result<(u32, u32)> {
    let tokens = tokenize(input.as_data());
    let ops = parse(&tokens)?;
    Ok((execute(&ops, false), execute(&ops, true)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Word(&'a [u8]),
    Number(&'a [u8]),
    LParen,
    RParen,
    Comma,
    Junk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Mul(u32, u32),
    Enable,
    Disable,
}

fn tokenize(mut data: &[u8]) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();

    while let [b, ..] = data {
        let n = match b {
            b'a'..=b'z' | b'A'..=b'Z' | b'\'' => {
                let n = run(data, |b| b.is_ascii_alphabetic() || b == b'\'');
                tokens.push(Token::Word(&data[..n]));
                n
            }
            b'0'..=b'9' => {
                let n = run(data, |b| b.is_ascii_digit());
                tokens.push(Token::Number(&data[..n]));
                n
            }
            b'(' => {
                tokens.push(Token::LParen);
                1
            }
            b')' => {
                tokens.push(Token::RParen);
                1
            }
            b',' => {
                tokens.push(Token::Comma);
                1
            }
            _ => {
                tokens.push(Token::Junk);
                1
            }
        };

        data = &data[n..];
    }

    tokens
}

/// Length of the leading run of bytes matching `p`.
fn run(data: &[u8], p: fn(u8) -> bool) -> usize {
    data.iter().take_while(|&&b| p(b)).count()
}

fn parse(mut tokens: &[Token<'_>]) -> Result<Vec<Op>> {
    use Token::*;

    let mut ops = Vec::new();

    while let [first, rest @ ..] = tokens {
        tokens = rest;

        let Word(word) = first else {
            continue;
        };

        if ends_with(word, b"don't") {
            if let [LParen, RParen, rest @ ..] = tokens {
                ops.push(Op::Disable);
                tokens = rest;
            }
        } else if ends_with(word, b"do") {
            if let [LParen, RParen, rest @ ..] = tokens {
                ops.push(Op::Enable);
                tokens = rest;
            }
        } else if ends_with(word, b"mul") {
            if let [LParen, Number(a), Comma, Number(b), RParen, rest @ ..] = tokens {
                if let (Some(a), Some(b)) = (number(a)?, number(b)?) {
                    ops.push(Op::Mul(a, b));
                    tokens = rest;
                }
            }
        }
    }

    Ok(ops)
}

fn ends_with(word: &[u8], suffix: &[u8]) -> bool {
    word.len() >= suffix.len() && word[word.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

/// Parse an argument, which is only valid with one to three digits.
fn number(digits: &[u8]) -> Result<Option<u32>> {
    if !(1..=3).contains(&digits.len()) {
        return Ok(None);
    }

    let string = digits.to_str().context("non-utf8 number")?;
    Ok(Some(string.parse()?))
}

fn execute(ops: &[Op], toggles: bool) -> u32 {
    let mut enabled = true;
    let mut sum = 0;

    for op in ops {
        match *op {
            Op::Mul(a, b) if enabled || !toggles => {
                sum += a * b;
            }
            Op::Mul(..) => {}
            Op::Enable => {
                enabled = true;
            }
            Op::Disable => {
                enabled = false;
            }
        }
    }

    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        use Token::*;

        let tokens = tokenize(b"xmul(2,4)&");

        assert_eq!(
            tokens,
            [Word(b"xmul"), LParen, Number(b"2"), Comma, Number(b"4"), RParen, Junk]
        );
    }

    #[test]
    fn test_parse() {
        let ops = parse(&tokenize(b"mul(4*mul(1234,1)mul(12,3)don't()DO()mul ( 2,4)")).unwrap();
        assert_eq!(ops, [Op::Mul(12, 3), Op::Disable, Op::Enable]);
    }

    #[test]
    fn test_argument_digits() {
        let ops = parse(&tokenize(b"xMUL(999,1)mul(1000,1)mul(0,5)mul(7,0042)")).unwrap();
        assert_eq!(ops, [Op::Mul(999, 1), Op::Mul(0, 5)]);
    }

    #[test]
    fn test_sample() {
        let ops = parse(&tokenize(include_bytes!("../../inputs/d03.txt"))).unwrap();
        assert_eq!(execute(&ops, false), 161);
        assert_eq!(execute(&ops, true), 48);
    }
}
