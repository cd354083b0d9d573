use crate::{CrittersError, Result};

fn malformed(msg: impl Into<String>) -> CrittersError {
    CrittersError::InvalidPattern(msg.into())
}

/// Returns width, height and `(row, col)` coordinates of the `On` cells of an RLE pattern.
pub fn parse_rle(data: &[u8]) -> Result<(usize, usize, Vec<(usize, usize)>)> {
    let parse_next_number = |i: &mut usize| -> Result<usize> {
        while *i < data.len() && !data[*i].is_ascii_digit() {
            if data[*i] == b'\n' {
                return Err(malformed("header is missing a dimension"));
            }
            *i += 1;
        }
        let j = {
            let mut j = *i;
            while j < data.len() && data[j].is_ascii_digit() {
                j += 1;
            }
            j
        };
        let ans = std::str::from_utf8(&data[*i..j])
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .ok_or_else(|| malformed("expected a number"))?;
        *i = j;
        Ok(ans)
    };

    let mut i = 0;
    // skipping comment lines
    while i < data.len() && (data[i] == b'#' || data[i].is_ascii_whitespace()) {
        while i < data.len() && data[i] != b'\n' {
            i += 1;
        }
        i += 1;
    }
    // next line must start with 'x'; parsing sizes
    if data.get(i) != Some(&b'x') {
        return Err(malformed("header line must start with 'x'"));
    }
    let width = parse_next_number(&mut i)?;
    let height = parse_next_number(&mut i)?;
    while i < data.len() && data[i] != b'\n' {
        i += 1;
    }
    i += 1;
    // run-length encoded pattern data
    let mut cells = vec![];
    let (mut x, mut y, mut cnt) = (0usize, 0usize, 1);
    while i < data.len() {
        match data[i] {
            b'\n' | b'\r' | b' ' | b'\t' => i += 1,
            b'0'..=b'9' => cnt = parse_next_number(&mut i)?,
            b'o' | b'b' => {
                let end = x
                    .checked_add(cnt)
                    .filter(|&end| end <= width)
                    .ok_or_else(|| malformed(format!("row {} is wider than {}", y, width)))?;
                if data[i] == b'o' {
                    cells.extend((x..end).map(|col| (y, col)));
                }
                (x, i, cnt) = (end, i + 1, 1);
            }
            b'$' => {
                y = y
                    .checked_add(cnt)
                    .filter(|&y| y < height)
                    .ok_or_else(|| malformed(format!("more than {} rows", height)))?;
                (x, i, cnt) = (0, i + 1, 1);
            }
            b'!' => break,
            other => {
                return Err(malformed(format!(
                    "unexpected symbol {:?}",
                    char::from(other)
                )))
            }
        };
    }
    Ok((width, height, cells))
}
