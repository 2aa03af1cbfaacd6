//! Community, recommended items and emergency CLI commands

use std::io::Write;

use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;

use super::Context;
use crate::display::community::{
    format_community_overview, format_emergency_overview, format_guide, format_items_overview,
    ContactRow, CounselingRow, GroupRow, GuideRow, ItemRow, PostRow,
};
use crate::error::{HomekeeperError, HomekeeperResult, ValidationError};
use crate::export::{export_error, write_json, write_yaml, JsonDocument, OutputFormat, Report};
use crate::fixtures;
use crate::models::{ItemCategory, POST_CATEGORIES};
use crate::services::community::{find_guide, posts_in, recommended, search_guides};
use crate::services::{CommunitySummary, EmergencySummary, ItemSort, ItemsSummary};

/// Community subcommands
#[derive(Subcommand, Debug)]
pub enum CommunityCommands {
    /// List board posts
    Posts {
        /// Only posts in this category (요리, 청소, 절약, 공동구매, 기타)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List groups
    Groups,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum SortArg {
    /// Most reviewed first
    #[default]
    Popular,
    /// Highest rating first
    Rating,
    /// Cheapest first
    Price,
    /// Most expensive first
    PriceHigh,
    /// Largest discount first
    Discount,
}

impl From<SortArg> for ItemSort {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::Popular => ItemSort::Popular,
            SortArg::Rating => ItemSort::Rating,
            SortArg::Price => ItemSort::PriceLow,
            SortArg::PriceHigh => ItemSort::PriceHigh,
            SortArg::Discount => ItemSort::Discount,
        }
    }
}

/// Arguments for the recommended items page
#[derive(Args, Debug)]
pub struct ItemsArgs {
    /// Only items in this category (kitchen, living, electronics, clothing)
    #[arg(short, long)]
    pub category: Option<String>,

    #[arg(short, long, value_enum, default_value_t = SortArg::Popular)]
    pub sort: SortArg,
}

/// Emergency subcommands
#[derive(Subcommand, Debug)]
pub enum EmergencyCommands {
    /// Emergency phone numbers and the stress check
    Contacts {
        /// Self-reported stress score, 0-100
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=100))]
        stress: Option<u8>,
    },

    /// Counselling centres
    Counseling,

    /// Step-by-step guides for household emergencies
    Manual {
        /// Only guides mentioning every word of this text
        #[arg(short, long)]
        query: Option<String>,
        /// Show the steps of one guide (fire, gas, water, electric)
        #[arg(short, long)]
        guide: Option<String>,
    },
}

#[derive(Debug, Serialize)]
struct PostsDocument<'a> {
    summary: &'a CommunitySummary,
    category: Option<&'a str>,
    posts: &'a [PostRow],
}

#[derive(Debug, Serialize)]
struct ItemsDocument<'a> {
    summary: &'a ItemsSummary,
    items: &'a [ItemRow],
}

#[derive(Debug, Serialize)]
struct EmergencyDocument<'a> {
    summary: &'a EmergencySummary,
    contacts: &'a [ContactRow],
}

/// Handle a community command
pub fn handle_community_command<W: Write>(
    ctx: &Context,
    cmd: CommunityCommands,
    out: &mut W,
) -> HomekeeperResult<()> {
    let posts = fixtures::posts();
    let groups = fixtures::groups();

    match cmd {
        CommunityCommands::Posts { category } => {
            let category = category.as_deref().map(str::trim);
            if let Some(c) = category {
                if !POST_CATEGORIES.contains(&c) {
                    return Err(ValidationError::UnknownCategory(c.to_string()).into());
                }
            }

            let summary = CommunitySummary::compute(&posts, &groups);
            let rows: Vec<PostRow> = posts_in(&posts, category)
                .into_iter()
                .map(PostRow::from)
                .collect();
            let document = PostsDocument {
                summary: &summary,
                category,
                posts: &rows,
            };

            Report {
                overview: format_community_overview(&summary),
                document: &JsonDocument::new("community", ctx.today, &document),
                rows: &rows,
                empty: "게시글이 없습니다.",
            }
            .emit(out, ctx.format)
        }

        CommunityCommands::Groups => {
            let rows: Vec<GroupRow> = groups.iter().map(GroupRow::from).collect();

            Report {
                overview: String::new(),
                document: &JsonDocument::new("groups", ctx.today, &rows),
                rows: &rows,
                empty: "모임이 없습니다.",
            }
            .emit(out, ctx.format)
        }
    }
}

/// Handle the recommended items page
pub fn handle_items_command<W: Write>(
    ctx: &Context,
    args: ItemsArgs,
    out: &mut W,
) -> HomekeeperResult<()> {
    let items = fixtures::recommended_items();
    let category = args
        .category
        .as_deref()
        .map(str::parse::<ItemCategory>)
        .transpose()?;

    let selected = recommended(&items, category, args.sort.into());
    let summary = ItemsSummary::compute(&items);
    let rows: Vec<ItemRow> = selected.into_iter().map(ItemRow::from).collect();
    let document = ItemsDocument {
        summary: &summary,
        items: &rows,
    };

    Report {
        overview: format_items_overview(&summary),
        document: &JsonDocument::new("items", ctx.today, &document),
        rows: &rows,
        empty: "추천 상품이 없습니다.",
    }
    .emit(out, ctx.format)
}

/// Handle an emergency command
pub fn handle_emergency_command<W: Write>(
    ctx: &Context,
    cmd: EmergencyCommands,
    out: &mut W,
) -> HomekeeperResult<()> {
    let contacts = fixtures::emergency_contacts();
    let services = fixtures::counseling_services();

    match cmd {
        EmergencyCommands::Contacts { stress } => {
            let score = stress.unwrap_or(fixtures::SAMPLE_STRESS_SCORE);
            let summary = EmergencySummary::compute(&contacts, &services, score);
            let rows: Vec<ContactRow> = contacts.iter().map(ContactRow::from).collect();
            let document = EmergencyDocument {
                summary: &summary,
                contacts: &rows,
            };

            Report {
                overview: format_emergency_overview(&summary),
                document: &JsonDocument::new("emergency", ctx.today, &document),
                rows: &rows,
                empty: "",
            }
            .emit(out, ctx.format)
        }

        EmergencyCommands::Manual { query, guide } => {
            let guides = fixtures::emergency_guides();

            if let Some(id) = guide {
                let selected =
                    find_guide(&guides, &id).ok_or_else(|| HomekeeperError::guide_not_found(id.trim()))?;
                return match ctx.format {
                    OutputFormat::Json => write_json(out, &JsonDocument::new("manual", ctx.today, selected)),
                    OutputFormat::Yaml => write_yaml(out, &JsonDocument::new("manual", ctx.today, selected)),
                    OutputFormat::Table | OutputFormat::Csv => {
                        writeln!(out, "{}", format_guide(selected)).map_err(export_error)
                    }
                };
            }

            let rows: Vec<GuideRow> = search_guides(&guides, query.as_deref())
                .into_iter()
                .map(GuideRow::from)
                .collect();

            Report {
                overview: String::new(),
                document: &JsonDocument::new("manual", ctx.today, &rows),
                rows: &rows,
                empty: "검색 결과가 없습니다.",
            }
            .emit(out, ctx.format)
        }

        EmergencyCommands::Counseling => {
            let rows: Vec<CounselingRow> = services.iter().map(CounselingRow::from).collect();

            Report {
                overview: String::new(),
                document: &JsonDocument::new("counseling", ctx.today, &rows),
                rows: &rows,
                empty: "",
            }
            .emit(out, ctx.format)
        }
    }
}
