use crate::collection::coin::Coin;
use chrono::{TimeZone, Utc};
use std::io::{self, Write};

pub fn print_row(out: &mut dyn Write, coin: &Coin) -> io::Result<()> {
    writeln!(
        out,
        "{}  {}  {}  {}",
        coin.id, coin.title, coin.country, coin.year
    )
}

pub fn print_rows(out: &mut dyn Write, coins: &[Coin]) -> io::Result<()> {
    for coin in coins {
        print_row(out, coin)?;
    }

    Ok(())
}

pub fn print_detail(out: &mut dyn Write, coin: &Coin) -> io::Result<()> {
    writeln!(out, "id:          {}", coin.id)?;
    writeln!(out, "title:       {}", coin.title)?;
    writeln!(out, "country:     {}", coin.country)?;
    writeln!(out, "year:        {}", coin.year)?;
    writeln!(out, "description: {}", coin.description)?;
    writeln!(out, "added:       {}", format_date_added(coin.date_added))?;

    if let Some(estimated_value) = &coin.estimated_value {
        writeln!(out, "value:       {}", estimated_value)?;
    }
    if let Some(composition) = &coin.composition {
        writeln!(out, "composition: {}", composition)?;
    }

    writeln!(out, "image:       {} bytes", coin.image.len())
}

pub fn print_count(out: &mut dyn Write, count: usize) -> io::Result<()> {
    writeln!(out, "{} Specimens Collected", count)
}

fn format_date_added(timestamp_millis: i64) -> String {
    Utc.timestamp_millis_opt(timestamp_millis)
        .single()
        .map(|v| v.to_rfc3339())
        .unwrap_or_else(|| timestamp_millis.to_string())
}
