mod helpers;

mod rendering;
