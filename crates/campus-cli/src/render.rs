//! Plain-text rendering of places, reviews, and profile state.

use std::io::{self, Write};

use campus_core::place::{Crowdedness, NoiseLevel, PlaceRecord};
use campus_store::{ActivityStats, NotificationPreferences};

fn noise_icon(level: NoiseLevel) -> &'static str {
  match level {
    NoiseLevel::Quiet => "🔇",
    NoiseLevel::Moderate => "🔉",
    NoiseLevel::Loud => "🔊",
  }
}

fn crowd_icon(level: Crowdedness) -> &'static str {
  match level {
    Crowdedness::Low => "🟢",
    Crowdedness::Medium => "🟡",
    Crowdedness::High => "🔴",
  }
}

fn yes_no(b: bool) -> &'static str { if b { "yes" } else { "no" } }

// ─── Lists ───────────────────────────────────────────────────────────────────

/// One line per place, followed by a result count.
pub fn place_list<P: AsRef<PlaceRecord>>(
  out: &mut impl Write,
  places: &[P],
) -> io::Result<()> {
  for p in places {
    let p: &PlaceRecord = p.as_ref();
    writeln!(
      out,
      "{:<16} {}  ({})  ⭐ {:.1}  {} {}  {} {}",
      p.id,
      p.name,
      p.location,
      p.rating,
      noise_icon(p.noise_level),
      p.noise_level,
      crowd_icon(p.crowdedness),
      p.crowdedness,
    )?;
  }
  let n = places.len();
  writeln!(out, "{n} {} found", if n == 1 { "result" } else { "results" })
}

// ─── Detail ──────────────────────────────────────────────────────────────────

pub fn place_detail(
  out: &mut impl Write,
  place: &PlaceRecord,
  favorite: bool,
  visited: bool,
) -> io::Result<()> {
  writeln!(out, "{}", place.name)?;
  writeln!(out, "  {}", place.location)?;
  writeln!(out, "  photo: {}", place.display_photo())?;
  writeln!(
    out,
    "  ⭐ {:.1} ({} reviews)",
    place.rating, place.review_count
  )?;
  if favorite || visited {
    let mut marks = Vec::new();
    if favorite {
      marks.push("♥ favorite");
    }
    if visited {
      marks.push("✓ visited");
    }
    writeln!(out, "  {}", marks.join("  "))?;
  }
  writeln!(out)?;
  writeln!(out, "  {}", place.description)?;
  writeln!(out)?;
  writeln!(
    out,
    "  noise: {} {}   crowd: {} {}   seating: {}",
    noise_icon(place.noise_level),
    place.noise_level,
    crowd_icon(place.crowdedness),
    place.crowdedness,
    yes_no(place.seating_available),
  )?;
  writeln!(
    out,
    "  wifi: {}   outlets: {}   food nearby: {}",
    yes_no(place.amenities.wifi),
    yes_no(place.amenities.outlets),
    yes_no(place.amenities.food_nearby),
  )?;
  if !place.categories.is_empty() {
    let cats: Vec<&str> = place.categories.iter().map(|c| c.as_ref()).collect();
    writeln!(out, "  categories: {}", cats.join(", "))?;
  }

  if place.reviews.is_empty() {
    writeln!(out, "\n  No reviews yet. Be the first!")?;
  } else {
    writeln!(out, "\n  Reviews")?;
    for r in &place.reviews {
      writeln!(
        out,
        "  {} {}  {}  {}",
        "★".repeat(r.rating.into()),
        r.user_name,
        r.date,
        r.comment,
      )?;
    }
  }
  Ok(())
}

// ─── Profile ─────────────────────────────────────────────────────────────────

pub fn profile(
  out: &mut impl Write,
  stats: ActivityStats,
  prefs: NotificationPreferences,
) -> io::Result<()> {
  writeln!(out, "Your activity")?;
  writeln!(out, "  favorites: {}", stats.favorites)?;
  writeln!(out, "  visited:   {}", stats.visited)?;
  writeln!(out, "Notifications")?;
  writeln!(out, "  crowdedness alerts: {}", if prefs.crowdedness { "on" } else { "off" })?;
  writeln!(out, "  new places:         {}", if prefs.new_places { "on" } else { "off" })
}
