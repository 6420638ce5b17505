mod preview_props;
