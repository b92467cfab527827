mod browse;
mod check;
mod fridge;
mod helpers;
mod seed;

pub(crate) use browse::{cmd_aisles, cmd_category, cmd_cookbook};
pub(crate) use check::cmd_check_keys;
pub(crate) use fridge::{cmd_fridge_list, cmd_fridge_stock};
pub(crate) use seed::{
    cmd_assign_aisles, cmd_retag, cmd_seed_ingredients, cmd_seed_products, cmd_seed_tags,
};
