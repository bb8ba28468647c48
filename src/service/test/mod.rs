mod blacklist;
mod member;
mod report;
