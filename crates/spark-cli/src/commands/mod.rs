pub mod dispatch;

mod audit;
mod fetch;
mod generate;
mod list;
mod new;
mod parse;
mod promote;
mod prs;
mod serve;
mod shared;
mod submit;
mod validate;
mod whoami;
