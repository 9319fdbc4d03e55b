//! Commands and their execution against a live store.
//!
//! This is the view layer: it checks user input, calls the store, and
//! renders what comes back. It never writes storage itself.

use std::io::{BufRead, Write};

use anyhow::{Context as _, Result, bail};
use campus_core::{
  draft::{PlaceDraft, ReviewDraft},
  place::{Amenities, Category, Crowdedness, NoiseLevel, PlaceRecord},
  query::PlaceQuery,
  storage::KeyValueStorage,
};
use campus_store::{AppStore, NotificationKind, ProfileSettings};
use chrono::Utc;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::debug;

use crate::render;

// ─── Commands ────────────────────────────────────────────────────────────────

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
  /// List every place, optionally only those in one category.
  List {
    #[arg(long)]
    category: Option<Category>,
  },
  /// Show one place with its reviews.
  Show { id: String },
  /// Search by text and filter by attributes.
  Search(SearchArgs),
  /// Mark or unmark a place as a favourite.
  Favorite { id: String },
  /// Mark or unmark a place as visited.
  Visit { id: String },
  /// List favourite places.
  Favorites,
  /// List visited places.
  Visited,
  /// Write a review for a place.
  Review {
    id:      String,
    /// 1 to 5 stars.
    #[arg(long, default_value_t = 0)]
    rating:  u8,
    #[arg(long, default_value = "")]
    comment: String,
  },
  /// Add a new study place.
  AddPlace(AddPlaceArgs),
  /// Show activity counts and notification settings.
  Profile {
    /// Flip one notification setting.
    #[arg(long, value_enum)]
    toggle: Option<NotificationArg>,
  },
  /// Manage the current session.
  Session {
    #[command(subcommand)]
    action: SessionAction,
  },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
  /// Discard session data (including added places) and reload the seed.
  End,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchArgs {
  /// Words to look for in name, location, or description.
  pub text:    Vec<String>,
  #[arg(long)]
  pub noise:   Option<NoiseLevel>,
  #[arg(long)]
  pub crowd:   Option<Crowdedness>,
  /// Only places with food nearby.
  #[arg(long)]
  pub food:    bool,
  /// Only places with outlets.
  #[arg(long)]
  pub outlets: bool,
  /// Only places with seating available.
  #[arg(long)]
  pub seating: bool,
  #[arg(long, conflicts_with = "outdoor")]
  pub indoor:  bool,
  #[arg(long)]
  pub outdoor: bool,
}

impl SearchArgs {
  /// Unticked boxes mean "any", not "must be false".
  pub fn to_query(&self) -> PlaceQuery {
    let text = self.text.join(" ");
    PlaceQuery {
      text: (!text.trim().is_empty()).then_some(text),
      noise_level: self.noise,
      crowdedness: self.crowd,
      has_food: self.food.then_some(true),
      has_outlets: self.outlets.then_some(true),
      seating_available: self.seating.then_some(true),
      indoor: if self.indoor {
        Some(true)
      } else if self.outdoor {
        Some(false)
      } else {
        None
      },
      category: None,
    }
  }
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct AddPlaceArgs {
  #[arg(long, default_value = "")]
  pub name:        String,
  #[arg(long, default_value = "")]
  pub location:    String,
  #[arg(long, default_value = "")]
  pub description: String,
  #[arg(long, default_value = "")]
  pub photo:       String,
  #[arg(long, default_value = "Moderate")]
  pub noise:       NoiseLevel,
  #[arg(long, default_value = "Medium")]
  pub crowd:       Crowdedness,
  #[arg(long)]
  pub no_seating:  bool,
  #[arg(long)]
  pub no_wifi:     bool,
  #[arg(long)]
  pub outlets:     bool,
  #[arg(long)]
  pub food:        bool,
  /// May be repeated.
  #[arg(long = "category")]
  pub categories:  Vec<Category>,
}

impl AddPlaceArgs {
  pub fn into_draft(self) -> PlaceDraft {
    PlaceDraft {
      name:              self.name,
      location:          self.location,
      description:       self.description,
      photo_url:         self.photo,
      noise_level:       self.noise,
      crowdedness:       self.crowd,
      seating_available: !self.no_seating,
      amenities:         Amenities {
        wifi:        !self.no_wifi,
        outlets:     self.outlets,
        food_nearby: self.food,
      },
      categories:        self.categories,
    }
  }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationArg {
  Crowdedness,
  NewPlaces,
}

impl From<NotificationArg> for NotificationKind {
  fn from(arg: NotificationArg) -> Self {
    match arg {
      NotificationArg::Crowdedness => NotificationKind::Crowdedness,
      NotificationArg::NewPlaces => NotificationKind::NewPlaces,
    }
  }
}

/// One line typed into the shell.
#[derive(Parser, Debug)]
#[command(name = "campus", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
  #[command(subcommand)]
  command: Command,
}

// ─── App ─────────────────────────────────────────────────────────────────────

/// Printed before each line read by an interactive shell.
pub const PROMPT: &str = "campus> ";

/// A store, the profile settings, and the seed list used to reset sessions.
pub struct App<L, S, P> {
  store:       AppStore<L, S>,
  profile:     ProfileSettings<P>,
  seed:        Vec<PlaceRecord>,
  /// Millisecond value behind the last generated id.
  last_id_ms:  i64,
}

impl<L, S, P> App<L, S, P>
where
  L: KeyValueStorage,
  S: KeyValueStorage,
  P: KeyValueStorage,
{
  pub fn new(
    store: AppStore<L, S>,
    profile: ProfileSettings<P>,
    seed: Vec<PlaceRecord>,
  ) -> Self {
    Self { store, profile, seed, last_id_ms: 0 }
  }


  #[cfg(test)]
  pub fn store(&self) -> &AppStore<L, S> { &self.store }

  fn require_place(&self, id: &str) -> Result<std::sync::Arc<PlaceRecord>> {
    match self.store.get_place(id) {
      Some(place) => Ok(place),
      None => bail!("Place not found: {id}"),
    }
  }

  pub fn execute(&mut self, command: Command, out: &mut impl Write) -> Result<()> {
    debug!(?command, "executing");
    match command {
      Command::List { category } => {
        let query = PlaceQuery { category, ..PlaceQuery::default() };
        render::place_list(out, &self.store.search(&query))?;
      }

      Command::Show { id } => {
        let place = self.require_place(&id)?;
        render::place_detail(
          out,
          &place,
          self.store.is_favorite(&id),
          self.store.is_visited(&id),
        )?;
      }

      Command::Search(args) => {
        render::place_list(out, &self.store.search(&args.to_query()))?;
      }

      Command::Favorite { id } => {
        let place = self.require_place(&id)?;
        let member = self.store.toggle_favorite(&id)?;
        if member {
          writeln!(out, "♥ {} added to favorites", place.name)?;
        } else {
          writeln!(out, "♡ {} removed from favorites", place.name)?;
        }
      }

      Command::Visit { id } => {
        let place = self.require_place(&id)?;
        let member = self.store.toggle_visited(&id)?;
        if member {
          writeln!(out, "✓ {} marked as visited", place.name)?;
        } else {
          writeln!(out, "{} no longer marked as visited", place.name)?;
        }
      }

      Command::Favorites => {
        render::place_list(out, &self.store.favorite_places())?;
      }

      Command::Visited => {
        render::place_list(out, &self.store.visited_places())?;
      }

      Command::Review { id, rating, comment } => {
        let target = self.require_place(&id)?;
        let ms = next_id_ms(&mut self.last_id_ms, |ms| {
          let review_id = format!("r{ms}");
          target.reviews.iter().any(|r| r.id == review_id)
        });
        let review = ReviewDraft::new(rating, comment)
          .into_review(Utc::now().date_naive(), ms)?;
        self.store.add_review(&id, review)?;
        let place = self.require_place(&id)?;
        writeln!(
          out,
          "Review added. {} now rated {:.1} ({} reviews)",
          place.name, place.rating, place.review_count
        )?;
      }

      Command::AddPlace(args) => {
        let draft = args.into_draft();
        let ms = next_id_ms(&mut self.last_id_ms, |ms| {
          self.store.get_place(&format!("place-{ms}")).is_some()
        });
        let place = draft.into_place(ms)?;
        let id = place.id.clone();
        self.store.add_place(place)?;
        writeln!(out, "Place added successfully! ({id})")?;
      }

      Command::Profile { toggle } => {
        let prefs = match toggle {
          Some(kind) => self.profile.toggle(kind.into())?,
          None => self.profile.load()?,
        };
        render::profile(out, self.store.stats(), prefs)?;
      }

      Command::Session { action: SessionAction::End } => {
        self.store.end_session(&self.seed)?;
        writeln!(
          out,
          "Session ended; {} places reloaded",
          self.store.places().len()
        )?;
      }
    }
    Ok(())
  }

  /// Read commands from `input` until EOF or `exit`. Errors are reported and
  /// the loop carries on, so one bad line does not end the session. With
  /// `interactive`, [`PROMPT`] is printed before each read.
  pub fn run_shell(
    &mut self,
    mut input: impl BufRead,
    out: &mut impl Write,
    interactive: bool,
  ) -> Result<()> {
    let mut line = String::new();
    loop {
      if interactive {
        write!(out, "{PROMPT}")?;
        out.flush()?;
      }
      line.clear();
      if input.read_line(&mut line).context("reading command")? == 0 {
        break;
      }
      let words = split_words(&line);
      match words.first().map(String::as_str) {
        None => continue,
        Some("exit" | "quit") => break,
        Some(_) => {}
      }

      match ShellLine::try_parse_from(&words) {
        Ok(parsed) => {
          if let Err(e) = self.execute(parsed.command, out) {
            writeln!(out, "error: {e:#}")?;
          }
        }
        Err(e) => write!(out, "{}", e.render())?,
      }
    }
    Ok(())
  }
}

/// A millisecond timestamp for a new id: the current time, but always past
/// `last` and past any value `taken` reports in use. Commands piped into the
/// shell arrive faster than the clock ticks, and a session file may hold ids
/// from an earlier run.
fn next_id_ms(last: &mut i64, taken: impl Fn(i64) -> bool) -> i64 {
  let mut ms = Utc::now().timestamp_millis().max(*last + 1);
  while taken(ms) {
    ms += 1;
  }
  *last = ms;
  ms
}

/// Split a shell line on whitespace, keeping double-quoted runs together.
pub fn split_words(line: &str) -> Vec<String> {
  let mut words = Vec::new();
  let mut current = String::new();
  let mut quoted = false;
  let mut in_word = false;

  for ch in line.chars() {
    match ch {
      '"' => {
        quoted = !quoted;
        in_word = true;
      }
      c if c.is_whitespace() && !quoted => {
        if in_word {
          words.push(std::mem::take(&mut current));
          in_word = false;
        }
      }
      c => {
        current.push(c);
        in_word = true;
      }
    }
  }
  if in_word {
    words.push(current);
  }
  words
}
