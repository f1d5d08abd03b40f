mod normalization;
mod properties;
mod scenario;
